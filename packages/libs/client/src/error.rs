//! 클라이언트 에러 타입
//!
//! 모든 API 호출은 이 에러 하나로 실패를 전달합니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Notes 클라이언트 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Request Errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// 2xx 이외의 응답. 메시지는 서버의 `message` 또는 작업별 기본 메시지
    #[error("{message}")]
    Request { status: u16, message: String },

    /// 연결 단계 실패 (변환 없이 그대로 전달)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    // ─────────────────────────────────────────────────────────────────────────────
    // IO/Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("token store error: {0}")]
    TokenStore(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────────────────────
    // Config Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("invalid base url: {url}")]
    InvalidBaseUrl { url: String },
}

impl Error {
    /// HTTP 상태 코드 (요청 에러일 때만)
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// 401 응답 여부
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
