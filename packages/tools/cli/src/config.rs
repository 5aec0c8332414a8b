//! CLI 설정

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// 세션 파일 경로 환경변수
pub const SESSION_FILE_ENV: &str = "NOTES_SESSION_FILE";

/// CLI 설정 (`~/.notes/config.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// 기본 API URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// 세션 토큰 파일 (기본 `~/.notes/session.json`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

impl CliConfig {
    /// 설정 디렉터리
    fn config_dir() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join(".notes"))
    }

    /// 설정 파일 경로
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 세션 토큰 파일 경로 (설정 파일 > NOTES_SESSION_FILE > 기본값)
    pub fn session_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.session_file {
            return Ok(path.clone());
        }
        if let Ok(path) = std::env::var(SESSION_FILE_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("session.json"))
    }

    /// 설정 로드
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: CliConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 설정 로드. 읽을 수 없으면 경고 후 기본값
    ///
    /// `config` 명령은 손상된 설정 파일을 고칠 수 있어야 하므로 이쪽을 씁니다.
    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// 설정 저장
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 설정 삭제
    pub fn clear_at(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// API URL 결정 (CLI 옵션 > 설정 파일 > NOTES_API_URL > 기본값)
    pub fn resolve_api_url(&self, flag: Option<&str>) -> String {
        flag.map(|s| s.to_string())
            .or_else(|| self.api_url.clone())
            .or_else(|| std::env::var(notes_client::config::API_URL_ENV).ok())
            .unwrap_or_else(|| notes_client::config::DEFAULT_API_URL.to_string())
    }
}
