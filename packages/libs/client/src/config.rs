//! 클라이언트 설정

use std::env;

use reqwest::Url;

use crate::error::{Error, Result};

/// 기본 API URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// API URL 환경변수
pub const API_URL_ENV: &str = "NOTES_API_URL";

/// 클라이언트 설정
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (끝의 `/` 제거됨)
    pub base_url: String,
}

impl ClientConfig {
    /// base URL 검증 후 생성
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|_| Error::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        let url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&url)
    }

    /// 경로를 붙인 전체 URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
