//! Sign-in, registration and identity commands.

use clap::Args;

use talentgate_client::TalentGateClient;
use talentgate_core::error::AppError;
use talentgate_entity::user::{LoginRequest, RegisterRequest, User};

use crate::output::{self, OutputFormat};

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// E-mail address (will prompt if not provided)
    #[arg(short, long)]
    pub email: Option<String>,
    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for `register`
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// E-mail address
    #[arg(short, long)]
    pub email: String,
    /// Given name
    #[arg(long)]
    pub first_name: String,
    /// Family name
    #[arg(long)]
    pub last_name: String,
    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Sign in
pub async fn login(
    args: &LoginArgs,
    client: &TalentGateClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    super::guard(client, "/login")?;

    let email = match &args.email {
        Some(e) => e.clone(),
        None => dialoguer::Input::new()
            .with_prompt("E-mail")
            .interact_text()
            .map_err(super::input_error)?,
    };
    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(super::input_error)?,
    };

    let user = client
        .auth()
        .login(&LoginRequest { email, password })
        .await?;

    output::print_success(&format!("Signed in as {} ({})", user.full_name(), user.role));
    print_user(&user, format);
    print_landing(client);
    Ok(())
}

/// Create a candidate account and sign in
pub async fn register(
    args: &RegisterArgs,
    client: &TalentGateClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    super::guard(client, "/register")?;

    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(super::input_error)?,
    };

    let user = client
        .auth()
        .register(&RegisterRequest {
            email: args.email.clone(),
            password,
            first_name: args.first_name.clone(),
            last_name: args.last_name.clone(),
        })
        .await?;

    output::print_success(&format!("Account created for {}", user.email));
    print_user(&user, format);
    print_landing(client);
    Ok(())
}

/// Sign out
pub async fn logout(client: &TalentGateClient) -> Result<(), AppError> {
    if client.session().access_token().is_none() {
        output::print_warning("Not signed in");
        return Ok(());
    }
    client.auth().logout().await?;
    output::print_success("Signed out");
    Ok(())
}

/// Show the signed-in user, refreshed from the server
pub async fn whoami(client: &TalentGateClient, format: OutputFormat) -> Result<(), AppError> {
    if client.session().access_token().is_none() {
        output::print_warning("Not signed in");
        return Ok(());
    }
    let user = client.auth().current_user().await?;
    print_user(&user, format);
    Ok(())
}

fn print_user(user: &User, format: OutputFormat) {
    output::print_item(
        user,
        &[
            ("ID", user.id.to_string()),
            ("Name", user.full_name()),
            ("E-mail", user.email.clone()),
            ("Role", user.role.to_string()),
        ],
        format,
    );
}

fn print_landing(client: &TalentGateClient) {
    let session = client.session().snapshot();
    let home = client.guard().policy().home_route(session.role());
    output::print_kv("Home", home);
}
