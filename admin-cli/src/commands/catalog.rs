//! `categories`, `subcategories` and `products` commands

use admin_client::screens::{CategoryScreen, ProductScreen, SubcategoryScreen};
use clap::Subcommand;
use shared::ListFilter;
use shared::forms::{CategoryForm, ProductForm, SubcategoryForm};

use super::{Context, lines};

#[derive(Subcommand)]
pub enum CategoriesCommand {
    List {
        #[arg(long)]
        search: Option<String>,
    },
    Add {
        #[arg(long)]
        title: String,
        /// Comma-separated subcategory names
        #[arg(long, default_value = "")]
        items: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        items: String,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum SubcategoriesCommand {
    List {
        /// Parent category id
        #[arg(long)]
        category: Option<String>,
    },
    Add {
        #[arg(long)]
        category: String,
        #[arg(long)]
        name: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        name: String,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Distinct product categories
    Categories,
    Add(ProductArgs),
    Edit {
        id: String,
        #[command(flatten)]
        product: ProductArgs,
    },
    Delete { id: String },
}

#[derive(clap::Args)]
pub struct ProductArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    price: String,
    #[arg(long)]
    category: String,
    #[arg(long, default_value = "")]
    description: String,
    /// Image reference (URL or file name); repeatable
    #[arg(long = "image")]
    images: Vec<String>,
    /// Leave out when stock is not tracked
    #[arg(long, default_value = "")]
    stock: String,
    #[arg(long)]
    trending: bool,
    #[arg(long)]
    top: bool,
}

impl From<ProductArgs> for ProductForm {
    fn from(args: ProductArgs) -> Self {
        ProductForm {
            name: args.name,
            price: args.price,
            category: args.category,
            description: args.description,
            images: args.images,
            stock: args.stock,
            is_trending: args.trending,
            is_top_product: args.top,
        }
    }
}

pub async fn categories(ctx: &Context, command: CategoriesCommand) -> anyhow::Result<()> {
    ctx.signed_in().await?;
    let mut screen = CategoryScreen::new(&ctx.api);
    screen.refresh().await?;
    match command {
        CategoriesCommand::List { search } => {
            screen.search(search.as_deref().unwrap_or_default());
            let visible: Vec<_> = screen.list().visible().into_iter().cloned().collect();
            ctx.emit(&visible, |rows| {
                lines(rows, |c| format!("{}\t{}\t{}", c.id, c.title, c.items.join(", ")))
            })
        }
        CategoriesCommand::Add { title, items } => {
            ctx.notice(screen.add(&CategoryForm::new(title, items)).await?)
        }
        CategoriesCommand::Edit { id, title, items } => {
            ctx.notice(screen.edit(&id, &CategoryForm::new(title, items)).await?)
        }
        CategoriesCommand::Delete { id } => ctx.notice(screen.delete(&id).await?),
    }
}

pub async fn subcategories(ctx: &Context, command: SubcategoriesCommand) -> anyhow::Result<()> {
    ctx.signed_in().await?;
    let mut screen = SubcategoryScreen::new(&ctx.api);
    screen.refresh().await?;
    match command {
        SubcategoriesCommand::List { category } => {
            screen.filter_category(category.as_deref());
            let visible: Vec<_> = screen.list().visible().into_iter().cloned().collect();
            ctx.emit(&visible, |rows| {
                lines(rows, |s| format!("{}\t{}\t{}", s.id, s.category_id, s.name))
            })
        }
        SubcategoriesCommand::Add { category, name } => {
            ctx.notice(screen.add(&SubcategoryForm::new(category, name)).await?)
        }
        SubcategoriesCommand::Edit { id, category, name } => {
            ctx.notice(screen.edit(&id, &SubcategoryForm::new(category, name)).await?)
        }
        SubcategoriesCommand::Delete { id } => ctx.notice(screen.delete(&id).await?),
    }
}

pub async fn products(ctx: &Context, command: ProductsCommand) -> anyhow::Result<()> {
    ctx.signed_in().await?;
    let mut screen = ProductScreen::new(&ctx.api);
    screen.refresh().await?;
    match command {
        ProductsCommand::List {
            category,
            search,
            page,
        } => {
            let mut filter = ListFilter::search(search.unwrap_or_default());
            filter.category = category;
            screen.set_filter(filter);
            if !screen.list_mut().go_to_page(page) {
                anyhow::bail!("page {} is out of range (1-{})", page, screen.list().total_pages());
            }
            let rows: Vec<_> = screen.list().page_items().into_iter().cloned().collect();
            ctx.emit(&rows, |rows| {
                lines(rows, |p| {
                    format!(
                        "{}\t{}\t{}\t{:.2}\tstock {}",
                        p.id,
                        p.name,
                        p.category,
                        p.price,
                        p.stock.map_or("-".to_string(), |s| s.to_string())
                    )
                })
            })
        }
        ProductsCommand::Categories => {
            let categories = screen.categories();
            ctx.emit(&categories, |c| c.join("\n"))
        }
        ProductsCommand::Add(args) => ctx.notice(screen.create(&args.into()).await?),
        ProductsCommand::Edit { id, product } => {
            ctx.notice(screen.edit(&id, &product.into()).await?)
        }
        ProductsCommand::Delete { id } => ctx.notice(screen.delete(&id).await?),
    }
}
