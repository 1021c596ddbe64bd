//! Command tree and shared command context

mod catalog;
mod orders;
mod people;
mod sales;
mod session;

use admin_client::{AdminApi, AuthGate, NetworkHttpClient, Notice, Session, SessionStore};
use anyhow::bail;
use clap::Subcommand;
use serde::Serialize;
use shared::models::AdminUser;

use crate::config::CliConfig;

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in admin
    Whoami,
    #[command(subcommand)]
    Orders(orders::OrdersCommand),
    #[command(subcommand)]
    Coupons(sales::CouponsCommand),
    #[command(subcommand)]
    Categories(catalog::CategoriesCommand),
    #[command(subcommand)]
    Subcategories(catalog::SubcategoriesCommand),
    #[command(subcommand)]
    Products(catalog::ProductsCommand),
    #[command(subcommand)]
    Customers(people::CustomersCommand),
    #[command(subcommand)]
    Messages(people::MessagesCommand),
    #[command(subcommand)]
    Refunds(sales::RefundsCommand),
    #[command(subcommand)]
    Delivery(sales::DeliveryCommand),
    #[command(subcommand)]
    Report(sales::ReportCommand),
}

pub async fn run(ctx: &Context, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => session::login(ctx, &email, &password).await,
        Command::Logout => session::logout(ctx),
        Command::Whoami => session::whoami(ctx).await,
        Command::Orders(cmd) => orders::run(ctx, cmd).await,
        Command::Coupons(cmd) => sales::coupons(ctx, cmd).await,
        Command::Categories(cmd) => catalog::categories(ctx, cmd).await,
        Command::Subcategories(cmd) => catalog::subcategories(ctx, cmd).await,
        Command::Products(cmd) => catalog::products(ctx, cmd).await,
        Command::Customers(cmd) => people::customers(ctx, cmd).await,
        Command::Messages(cmd) => people::messages(ctx, cmd).await,
        Command::Refunds(cmd) => sales::refunds(ctx, cmd).await,
        Command::Delivery(cmd) => sales::delivery(ctx, cmd).await,
        Command::Report(cmd) => sales::report(ctx, cmd).await,
    }
}

pub struct Context {
    pub api: AdminApi<NetworkHttpClient>,
    store: SessionStore,
    json: bool,
}

impl Context {
    pub fn new(config: &CliConfig, json: bool) -> anyhow::Result<Self> {
        let http = NetworkHttpClient::new(&config.client_config(), Session::new())?;
        Ok(Self {
            api: AdminApi::new(http),
            store: SessionStore::in_dir(&config.session_dir),
            json,
        })
    }

    pub fn gate(&self) -> AuthGate<'_, NetworkHttpClient> {
        AuthGate::new(&self.api).with_store(self.store.clone())
    }

    /// Restore the stored session; every command except `login` needs one.
    pub async fn signed_in(&self) -> anyhow::Result<AdminUser> {
        match self.gate().restore().await? {
            Some(user) => Ok(user),
            None => bail!("not signed in, run `shop-admin login` first"),
        }
    }

    /// JSON when `--json` was given, otherwise `render`'s text.
    pub fn emit<T: Serialize>(&self, value: &T, render: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", render(value));
        }
        Ok(())
    }

    pub fn notice(&self, notice: Notice) -> anyhow::Result<()> {
        if notice.is_error() {
            bail!(notice.message);
        }
        println!("{}", notice);
        Ok(())
    }
}

/// One line per row, or a placeholder for an empty list.
pub(crate) fn lines<T>(rows: &[T], row: impl Fn(&T) -> String) -> String {
    if rows.is_empty() {
        return "(none)".to_string();
    }
    rows.iter().map(row).collect::<Vec<_>>().join("\n")
}
