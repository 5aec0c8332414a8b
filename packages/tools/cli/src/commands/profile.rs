//! 프로필 명령어

use crate::commands::http;
use crate::commands::OutputFormat;
use crate::config::CliConfig;

pub async fn show(
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
    println!("name:  {}", profile.name().unwrap_or("(not set)"));
    println!("email: {}", profile.email().unwrap_or("(not set)"));
    println!("bio:   {}", profile.bio().unwrap_or("(not set)"));
    Ok(())
}

pub async fn update(
    config: &CliConfig,
    api_url: Option<&str>,
    format: OutputFormat,
    name: &str,
    email: &str,
    bio: Option<&str>,
    password: Option<&str>,
) -> anyhow::Result<()> {
    http::require_fields(&[name, email], "Name and email are required")?;
    let api = http::client(config, api_url)?;
    http::require_login(&api)?;

    let profile = api.update_profile(name, email, bio, password).await?;

    if format.print_json(&profile)? {
        return Ok(());
    }
    println!("Profile updated successfully!");
    Ok(())
}
