use shared::forms::{CategoryForm, ProductForm, SubcategoryForm};
use shared::listing::ListFilter;
use shared::models::{Category, Product, Subcategory};
use shared::validation::{FormError, MAX_CATEGORIES};
use tracing::{info, warn};

use super::{Notice, delete_notice};
use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::list::ListView;
use crate::ClientResult;

// ── Categories ──────────────────────────────────────────────────────

pub struct CategoryScreen<'a, C> {
    api: &'a AdminApi<C>,
    list: ListView<Category>,
}

impl<'a, C: HttpClient> CategoryScreen<'a, C> {
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self {
            api,
            list: ListView::new(MAX_CATEGORIES as u32),
        }
    }

    pub fn list(&self) -> &ListView<Category> {
        &self.list
    }

    pub fn search(&mut self, text: &str) {
        self.list.set_search(text);
    }

    pub async fn refresh(&mut self) -> ClientResult<usize> {
        let categories = self.api.categories().list().await?;
        self.list.set_items(categories);
        Ok(self.list.len())
    }

    /// At most [`MAX_CATEGORIES`]; the stored category is appended locally.
    pub async fn add(&mut self, form: &CategoryForm) -> ClientResult<Notice> {
        let draft = form.validate()?;
        if self.list.len() >= MAX_CATEGORIES {
            return Err(FormError::LimitReached {
                what: "categories",
                max: MAX_CATEGORIES,
            }
            .into());
        }
        let category = self.api.categories().create(&draft).await?;
        info!(title = %category.title, "category added");
        let message = format!("Category {} added", category.title);
        self.list.push(category);
        Ok(Notice::success(message))
    }

    /// The stored category replaces the local row.
    pub async fn edit(&mut self, id: &str, form: &CategoryForm) -> ClientResult<Notice> {
        let draft = form.validate()?;
        let category = self.api.categories().update(id, &draft).await?;
        let message = format!("Category {} updated", category.title);
        self.list.replace(category);
        Ok(Notice::success(message))
    }

    /// A 404 means someone else already deleted it: the row goes away with
    /// an informational notice.
    pub async fn delete(&mut self, id: &str) -> ClientResult<Notice> {
        let result = self.api.categories().delete(id).await;
        let outcome = self.list.apply_delete(id, result)?;
        Ok(delete_notice(outcome, "Category"))
    }
}

// ── Subcategories ───────────────────────────────────────────────────

pub struct SubcategoryScreen<'a, C> {
    api: &'a AdminApi<C>,
    list: ListView<Subcategory>,
}

impl<'a, C: HttpClient> SubcategoryScreen<'a, C> {
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self {
            api,
            list: ListView::default(),
        }
    }

    pub fn list(&self) -> &ListView<Subcategory> {
        &self.list
    }

    /// Restrict to one parent category (`None` shows all).
    pub fn filter_category(&mut self, category_id: Option<&str>) {
        let mut filter = self.list.filter().clone();
        filter.category = category_id.map(str::to_string);
        self.list.set_filter(filter);
    }

    pub async fn refresh(&mut self) -> ClientResult<usize> {
        let subcategories = self.api.subcategories().list().await?;
        self.list.set_items(subcategories);
        Ok(self.list.len())
    }

    pub async fn add(&mut self, form: &SubcategoryForm) -> ClientResult<Notice> {
        let draft = form.validate()?;
        self.api.subcategories().create(&draft).await?;
        self.refresh().await?;
        Ok(Notice::success(format!("Subcategory {} added", draft.name)))
    }

    pub async fn edit(&mut self, id: &str, form: &SubcategoryForm) -> ClientResult<Notice> {
        let draft = form.validate()?;
        self.api.subcategories().update(id, &draft).await?;
        self.refresh().await?;
        Ok(Notice::success(format!("Subcategory {} updated", draft.name)))
    }

    pub async fn delete(&mut self, id: &str) -> ClientResult<Notice> {
        let result = self.api.subcategories().delete(id).await;
        let outcome = self.list.apply_delete(id, result)?;
        // the delete stands even if the follow-up fetch fails
        if let Err(e) = self.refresh().await {
            warn!(error = %e, "refresh after delete failed");
        }
        Ok(delete_notice(outcome, "Subcategory"))
    }
}

// ── Products ────────────────────────────────────────────────────────

pub struct ProductScreen<'a, C> {
    api: &'a AdminApi<C>,
    list: ListView<Product>,
}

impl<'a, C: HttpClient> ProductScreen<'a, C> {
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self {
            api,
            list: ListView::default(),
        }
    }

    pub fn list(&self) -> &ListView<Product> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView<Product> {
        &mut self.list
    }

    pub fn set_filter(&mut self, filter: ListFilter) {
        self.list.set_filter(filter);
    }

    /// Exact category match (`None` shows all).
    pub fn filter_category(&mut self, category: Option<&str>) {
        let mut filter = self.list.filter().clone();
        filter.category = category.map(str::to_string);
        self.list.set_filter(filter);
    }

    /// Distinct categories of the loaded products, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .list
            .items()
            .iter()
            .map(|p| p.category.clone())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub async fn refresh(&mut self) -> ClientResult<usize> {
        let products = self.api.products().list().await?;
        self.list.set_items(products);
        Ok(self.list.len())
    }

    pub async fn create(&mut self, form: &ProductForm) -> ClientResult<Notice> {
        let draft = form.validate()?;
        let product = self.api.products().create(&draft).await?;
        info!(product_id = %product.id, "product created");
        self.refresh().await?;
        Ok(Notice::success(format!("Product {} created", product.name)))
    }

    pub async fn edit(&mut self, id: &str, form: &ProductForm) -> ClientResult<Notice> {
        let draft = form.validate()?;
        self.api.products().update(id, &draft).await?;
        self.refresh().await?;
        Ok(Notice::success(format!("Product {} updated", draft.name)))
    }

    pub async fn delete(&mut self, id: &str) -> ClientResult<Notice> {
        let result = self.api.products().delete(id).await;
        let outcome = self.list.apply_delete(id, result)?;
        Ok(delete_notice(outcome, "Product"))
    }
}
