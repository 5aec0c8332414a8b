//! notes-client: Notes 백엔드 REST 클라이언트
//!
//! 세션 토큰 수명주기와 인증 요청 구성, 응답/에러 정규화를 담당합니다.
//!
//! # 모듈 구조
//!
//! - `session`: 토큰 저장소와 세션 컨텍스트
//! - `http`: 작업별 기본 메시지, 헤더 구성, 공통 응답 처리
//! - `api`: auth / user / tasks 요청 래퍼
//! - `models`: 요청/응답 모델
//! - `config`: base URL 설정
//! - `error`: 공통 에러 타입

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod session;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::Operation;
pub use models::{Acknowledgement, AuthSession, Note, Profile};
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
