use admin_client::screens::{CustomerScreen, MessageScreen};
use clap::Subcommand;
use shared::forms::{CustomerForm, ReplyForm};

use super::{Context, lines};

#[derive(Subcommand)]
pub enum CustomersCommand {
    List {
        /// Name or email
        #[arg(long)]
        search: Option<String>,
    },
    Edit {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        joined: String,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum MessagesCommand {
    List {
        /// new, replied or resolved
        #[arg(long)]
        status: Option<String>,
    },
    Reply { id: String, text: String },
    /// Toggle between resolved and new
    Resolve { id: String },
    Delete { id: String },
}

pub async fn customers(ctx: &Context, command: CustomersCommand) -> anyhow::Result<()> {
    ctx.signed_in().await?;
    let mut screen = CustomerScreen::new(&ctx.api);
    screen.refresh().await?;
    match command {
        CustomersCommand::List { search } => {
            screen.search(search.as_deref().unwrap_or_default());
            let rows: Vec<_> = screen.list().visible().into_iter().cloned().collect();
            ctx.emit(&rows, |rows| {
                lines(rows, |c| format!("{}\t{}\t{}\tjoined {}", c.id, c.name, c.email, c.joined))
            })
        }
        CustomersCommand::Edit {
            id,
            name,
            email,
            joined,
        } => {
            let form = CustomerForm { name, email, joined };
            ctx.notice(screen.edit(&id, &form).await?)
        }
        CustomersCommand::Delete { id } => ctx.notice(screen.delete(&id).await?),
    }
}

pub async fn messages(ctx: &Context, command: MessagesCommand) -> anyhow::Result<()> {
    ctx.signed_in().await?;
    let mut screen = MessageScreen::new(&ctx.api);
    screen.refresh().await?;
    match command {
        MessagesCommand::List { status } => {
            let mut filter = screen.list().filter().clone();
            filter.status = status;
            screen.list_mut().set_filter(filter);
            let rows: Vec<_> = screen.list().visible().into_iter().cloned().collect();
            ctx.emit(&rows, |rows| {
                lines(rows, |m| {
                    format!("{}\t[{}]\t{} <{}>\t{}", m.id, m.status, m.name, m.email, m.subject)
                })
            })
        }
        MessagesCommand::Reply { id, text } => {
            ctx.notice(screen.reply(&id, &ReplyForm::new(text)).await?)
        }
        MessagesCommand::Resolve { id } => ctx.notice(screen.toggle_resolved(&id).await?),
        MessagesCommand::Delete { id } => ctx.notice(screen.delete(&id).await?),
    }
}
