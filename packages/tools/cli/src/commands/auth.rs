//! 인증 명령어

use notes_client::AuthSession;

use crate::commands::http;
use crate::commands::OutputFormat;
use crate::config::CliConfig;

pub async fn signup(
    config: &CliConfig,
    api_url: Option<&str>,
    format: OutputFormat,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    http::require_fields(&[name, email, password], "Name, email and password are required")?;
    let api = http::client(config, api_url)?;

    let session = api.signup(name, email, password).await?;
    let stored = store_token(&api, &session)?;

    if format.print_json(&session)? {
        return Ok(());
    }
    println!("Account created for {}.", email);
    if stored {
        println!("Logged in.");
    } else {
        println!("Use 'notes login' to sign in.");
    }
    Ok(())
}

pub async fn login(
    config: &CliConfig,
    api_url: Option<&str>,
    format: OutputFormat,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    http::require_fields(&[email, password], "Email and password are required")?;
    let api = http::client(config, api_url)?;

    let session = api.login(email, password).await?;
    if !store_token(&api, &session)? {
        anyhow::bail!("Login response did not include a token");
    }

    if format.print_json(&session)? {
        return Ok(());
    }
    println!("Logged in as {}.", email);
    Ok(())
}

pub fn logout(config: &CliConfig, api_url: Option<&str>) -> anyhow::Result<()> {
    let api = http::client(config, api_url)?;
    api.remove_token()?;
    println!("Logged out.");
    Ok(())
}

/// 대시보드: 프로필 조회 후 인사
pub async fn whoami(
    config: &CliConfig,
    api_url: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let api = http::client(config, api_url)?;
    http::require_login(&api)?;

    let profile = http::load_or_logout(&api, api.get_profile()).await?;

    if format.print_json(&profile)? {
        return Ok(());
    }
    println!("Welcome back, {}!", profile.name().unwrap_or("there"));
    println!("  email: {}", profile.email().unwrap_or("(unknown)"));
    Ok(())
}

/// 응답에 토큰이 있으면 저장
fn store_token(api: &notes_client::ApiClient, session: &AuthSession) -> anyhow::Result<bool> {
    match session.token() {
        Some(token) => {
            api.save_token(token)?;
            tracing::debug!("Session token stored");
            Ok(true)
        }
        None => Ok(false),
    }
}
