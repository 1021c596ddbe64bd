use shared::forms::LoginForm;

use super::Context;

pub async fn login(ctx: &Context, email: &str, password: &str) -> anyhow::Result<()> {
    let user = ctx.gate().login(&LoginForm::new(email, password)).await?;
    println!("Signed in as {} <{}>", user.name, user.email);
    Ok(())
}

pub fn logout(ctx: &Context) -> anyhow::Result<()> {
    ctx.gate().logout()?;
    println!("Signed out");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> anyhow::Result<()> {
    let user = ctx.signed_in().await?;
    ctx.emit(&user, |u| format!("{} <{}> ({})", u.name, u.email, u.role))
}
