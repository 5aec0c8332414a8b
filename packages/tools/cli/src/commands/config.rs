//! 설정 명령어
//!
//! 손상된 설정 파일도 덮어쓰거나 지울 수 있도록 읽기 실패는 기본값으로 취급합니다.

use std::path::Path;

use crate::config::CliConfig;

pub fn set(path: &Path, api_url: Option<String>) -> anyhow::Result<()> {
    let mut config = CliConfig::load_or_default_from(path);

    if let Some(url) = api_url {
        notes_client::ClientConfig::new(&url)?;
        config.api_url = Some(url);
    }

    config.save_to(path)?;
    println!("Config updated.");
    show(path)
}

pub fn show(path: &Path) -> anyhow::Result<()> {
    let config = CliConfig::load_or_default_from(path);

    println!("Current config ({}):", path.display());
    println!("  api_url:  {}", config.api_url.as_deref().unwrap_or("(not set)"));
    println!("  resolved: {}", config.resolve_api_url(None));
    let session = config
        .session_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|e| format!("(unavailable: {})", e));
    println!("  session:  {}", session);

    Ok(())
}

pub fn clear(path: &Path) -> anyhow::Result<()> {
    CliConfig::clear_at(path)?;
    println!("Config cleared.");
    Ok(())
}
