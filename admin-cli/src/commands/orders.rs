//! `orders` commands: the filtered listing and the order detail workflow

use admin_client::{OrderBrowser, OrderWorkflow};
use clap::Subcommand;
use shared::listing::{DEFAULT_PAGE_SIZE, OrderQuery, PAGE_SIZES};
use shared::models::{Order, OrderStatus, PaymentProof, PaymentStatus, VerificationDecision};

use super::{Context, lines};

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// Server-side filtered, paginated listing
    List {
        #[arg(long)]
        status: Option<OrderStatus>,
        #[arg(long)]
        payment_status: Option<PaymentStatus>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// 10, 25 or 50
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,
    },
    /// Order detail with payment proof and available actions
    Show { id: String },
    /// Set status (pending, processing, shipped, delivered)
    Status {
        id: String,
        status: OrderStatus,
        #[arg(long)]
        tracking: Option<String>,
    },
    Cancel {
        id: String,
        #[arg(long)]
        reason: String,
    },
    /// Append an admin note
    Note { id: String, note: String },
    /// Review the payment proof (verified or rejected)
    Verify {
        id: String,
        decision: VerificationDecision,
        #[arg(long)]
        notes: Option<String>,
    },
}

pub async fn run(ctx: &Context, command: OrdersCommand) -> anyhow::Result<()> {
    ctx.signed_in().await?;
    match command {
        OrdersCommand::List {
            status,
            payment_status,
            search,
            page,
            limit,
        } => {
            if !PAGE_SIZES.contains(&limit) {
                anyhow::bail!("page size must be one of {:?}", PAGE_SIZES);
            }
            let query = OrderQuery::new()
                .page(page)
                .limit(limit)
                .status(status)
                .payment_status(payment_status)
                .search(search.unwrap_or_default());
            let current = OrderBrowser::new(&ctx.api).with_query(query).fetch().await?;
            ctx.emit(&current, |p| {
                format!(
                    "{}\npage {}/{} ({} orders)",
                    lines(&p.items, order_row),
                    p.page,
                    p.total_pages,
                    p.total
                )
            })
        }
        OrdersCommand::Show { id } => {
            let workflow = OrderWorkflow::new(&ctx.api);
            let order = workflow.load_order(Some(&id)).await?;
            let proof = workflow.load_payment_proof().await?;
            let actions = workflow.available_actions();
            ctx.emit(&order, |o| {
                let targets: Vec<&str> = actions.status_targets.iter().map(|s| s.as_str()).collect();
                format!(
                    "{}\n{}\nactions: status [{}]{}{}",
                    order_detail(o),
                    proof_detail(proof.as_ref()),
                    targets.join(", "),
                    if actions.can_cancel { ", cancel" } else { "" },
                    if actions.can_verify_payment { ", verify" } else { "" },
                )
            })
        }
        OrdersCommand::Status {
            id,
            status,
            tracking,
        } => {
            let workflow = OrderWorkflow::new(&ctx.api);
            workflow.load_order(Some(&id)).await?;
            let order = workflow.update_status(status, tracking.as_deref()).await?;
            ctx.emit(&order, |o| format!("{} is now {}", o.order_number, o.status))
        }
        OrdersCommand::Cancel { id, reason } => {
            let workflow = OrderWorkflow::new(&ctx.api);
            workflow.load_order(Some(&id)).await?;
            let order = workflow.cancel_order(&reason).await?;
            ctx.emit(&order, |o| format!("{} cancelled", o.order_number))
        }
        OrdersCommand::Note { id, note } => {
            let workflow = OrderWorkflow::new(&ctx.api);
            workflow.load_order(Some(&id)).await?;
            let order = workflow.add_admin_note(&note).await?;
            ctx.emit(&order, |o| {
                format!("{} now has {} note(s)", o.order_number, o.admin_notes.len())
            })
        }
        OrdersCommand::Verify {
            id,
            decision,
            notes,
        } => {
            let workflow = OrderWorkflow::new(&ctx.api);
            workflow.load_order(Some(&id)).await?;
            workflow.load_payment_proof().await?;
            let order = workflow.verify_payment(decision, notes.as_deref()).await?;
            ctx.emit(&order, |o| {
                format!("{} payment {}", o.order_number, o.payment_status)
            })
        }
    }
}

fn order_row(order: &Order) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{:.2}\t{}",
        order.id,
        order.order_number,
        order.customer_label(),
        order.status,
        order.total,
        order.payment_status
    )
}

fn order_detail(order: &Order) -> String {
    let mut out = format!(
        "{} ({})\ncustomer: {}\nstatus: {} / payment {}\nitems: {} (sizes {})\ntotal: {:.2} = {:.2} + delivery {:.2}",
        order.order_number,
        order.id,
        order.customer_label(),
        order.status,
        order.payment_status,
        order.item_count(),
        order.sizes(),
        order.total,
        order.subtotal,
        order.delivery_cost
    );
    if let Some(tracking) = &order.tracking_number {
        out.push_str(&format!("\ntracking: {}", tracking));
    }
    if let Some(reason) = &order.cancellation_reason {
        out.push_str(&format!("\ncancelled: {}", reason));
    }
    for note in &order.admin_notes {
        out.push_str(&format!(
            "\nnote: {} ({})",
            note.note,
            note.added_by.as_deref().unwrap_or("admin")
        ));
    }
    out
}

fn proof_detail(proof: Option<&PaymentProof>) -> String {
    match proof {
        Some(p) => format!(
            "payment proof: {} from {} ({}) {:.2} [{}]",
            p.transaction_id, p.sender_name, p.sender_number, p.amount, p.status
        ),
        None => "payment proof: none".to_string(),
    }
}
