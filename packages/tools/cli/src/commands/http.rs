use std::future::Future;

use notes_client::{ApiClient, ClientConfig, Session};

use crate::config::CliConfig;

pub fn client(config: &CliConfig, api_url: Option<&str>) -> anyhow::Result<ApiClient> {
    let url = config.resolve_api_url(api_url);
    let session = Session::with_file(config.session_path()?);
    Ok(ApiClient::new(ClientConfig::new(&url)?, session))
}

/// 토큰이 없으면 로그인 안내
pub fn require_login(api: &ApiClient) -> anyhow::Result<()> {
    if !api.is_authenticated() {
        anyhow::bail!("Not logged in. Use 'notes login' first.");
    }
    Ok(())
}

/// 인증 조회 실패 시 토큰을 지우고 재로그인 안내
pub async fn load_or_logout<T, F>(api: &ApiClient, fut: F) -> anyhow::Result<T>
where
    F: Future<Output = notes_client::Result<T>>,
{
    match fut.await {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!("Authenticated load failed, clearing session: {}", e);
            api.remove_token()?;
            Err(anyhow::anyhow!("{}. Session cleared; use 'notes login' again.", e))
        }
    }
}

/// 빈 필드 검증
pub fn require_fields(fields: &[&str], message: &str) -> anyhow::Result<()> {
    if fields.iter().any(|f| f.is_empty()) {
        anyhow::bail!("{}", message);
    }
    Ok(())
}
