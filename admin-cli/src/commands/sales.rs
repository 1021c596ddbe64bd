//! Coupons, refunds, delivery costs and reports

use admin_client::screens::{CouponScreen, DeliveryCostScreen, RefundScreen, reports};
use clap::Subcommand;
use shared::forms::{CouponForm, DeliveryCostForm};

use super::{Context, lines};

#[derive(Subcommand)]
pub enum CouponsCommand {
    List {
        /// Code or expiry date
        #[arg(long)]
        search: Option<String>,
    },
    Add {
        #[arg(long)]
        code: String,
        /// Percent, (0, 100]
        #[arg(long)]
        discount: String,
        /// YYYY-MM-DD
        #[arg(long)]
        expiry: String,
        #[arg(long)]
        inactive: bool,
    },
    Edit {
        id: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        discount: String,
        #[arg(long)]
        expiry: String,
        #[arg(long)]
        inactive: bool,
    },
    /// Flip the active flag
    Toggle { id: String },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum RefundsCommand {
    List,
    Approve { id: String },
    Reject { id: String },
}

#[derive(Subcommand)]
pub enum DeliveryCommand {
    Show {
        /// Also show the fee for this city
        #[arg(long)]
        city: Option<String>,
    },
    Set {
        #[arg(long)]
        inside: String,
        #[arg(long)]
        outside: String,
    },
}

#[derive(Subcommand)]
pub enum ReportCommand {
    /// Order, sales, product and customer totals
    Dashboard,
    /// Sales by month and orders per status
    Sales,
}

fn coupon_form(code: String, discount: String, expiry: String, inactive: bool) -> CouponForm {
    let form = CouponForm::new(code, discount, expiry);
    if inactive { form.inactive() } else { form }
}

pub async fn coupons(ctx: &Context, command: CouponsCommand) -> anyhow::Result<()> {
    ctx.signed_in().await?;
    let mut screen = CouponScreen::new(&ctx.api);
    screen.refresh().await?;
    match command {
        CouponsCommand::List { search } => {
            screen.search(search.as_deref().unwrap_or_default());
            let rows: Vec<_> = screen.list().visible().into_iter().cloned().collect();
            ctx.emit(&rows, |rows| {
                lines(rows, |c| {
                    format!(
                        "{}\t{}\t{}%\texpires {}\t{}",
                        c.id,
                        c.code,
                        c.discount,
                        c.expiry,
                        if c.active { "active" } else { "inactive" }
                    )
                })
            })
        }
        CouponsCommand::Add {
            code,
            discount,
            expiry,
            inactive,
        } => ctx.notice(screen.add(&coupon_form(code, discount, expiry, inactive)).await?),
        CouponsCommand::Edit {
            id,
            code,
            discount,
            expiry,
            inactive,
        } => ctx.notice(
            screen
                .edit(&id, &coupon_form(code, discount, expiry, inactive))
                .await?,
        ),
        CouponsCommand::Toggle { id } => ctx.notice(screen.toggle_active(&id).await?),
        CouponsCommand::Delete { id } => ctx.notice(screen.delete(&id).await?),
    }
}

pub async fn refunds(ctx: &Context, command: RefundsCommand) -> anyhow::Result<()> {
    ctx.signed_in().await?;
    let mut screen = RefundScreen::new(&ctx.api);
    screen.refresh().await?;
    match command {
        RefundsCommand::List => {
            let rows = screen.list().items().to_vec();
            ctx.emit(&rows, |rows| {
                lines(rows, |r| {
                    format!(
                        "{}\torder {}\t{}\t{:.2}\t{}\t[{}]",
                        r.id,
                        r.order_id.as_deref().unwrap_or("-"),
                        r.customer,
                        r.amount,
                        r.reason,
                        r.status
                    )
                })
            })
        }
        RefundsCommand::Approve { id } => ctx.notice(screen.approve(&id).await?),
        RefundsCommand::Reject { id } => ctx.notice(screen.reject(&id).await?),
    }
}

pub async fn delivery(ctx: &Context, command: DeliveryCommand) -> anyhow::Result<()> {
    ctx.signed_in().await?;
    let mut screen = DeliveryCostScreen::new(&ctx.api);
    match command {
        DeliveryCommand::Show { city } => {
            let costs = screen.load().await?;
            ctx.emit(&costs, |c| {
                let mut out = format!(
                    "inside Dhaka: {:.2}\noutside Dhaka: {:.2}",
                    c.dhaka_inside, c.dhaka_outside
                );
                if let Some(city) = &city {
                    out.push_str(&format!("\n{}: {:.2}", city, screen.cost_for_city(city)));
                }
                out
            })
        }
        DeliveryCommand::Set { inside, outside } => {
            ctx.notice(screen.save(&DeliveryCostForm::new(inside, outside)).await?)
        }
    }
}

pub async fn report(ctx: &Context, command: ReportCommand) -> anyhow::Result<()> {
    ctx.signed_in().await?;
    match command {
        ReportCommand::Dashboard => {
            let stats = reports::dashboard(&ctx.api).await?;
            ctx.emit(&stats, |s| {
                format!(
                    "orders: {}\nsales: {:.2}\nproducts: {}\ncustomers: {}",
                    s.total_orders, s.total_sales, s.total_products, s.total_customers
                )
            })
        }
        ReportCommand::Sales => {
            let report = reports::sales_report(&ctx.api).await?;
            ctx.emit(&report, |r| {
                let months = lines(&r.by_month, |m| {
                    format!("{}\t{} orders\t{:.2}", m.month, m.orders, m.total)
                });
                let statuses: Vec<String> = r
                    .status_counts
                    .iter()
                    .map(|(status, count)| format!("{}: {}", status, count))
                    .collect();
                format!(
                    "total sales: {:.2}\n{}\n{}",
                    r.total_sales,
                    months,
                    statuses.join(", ")
                )
            })
        }
    }
}
