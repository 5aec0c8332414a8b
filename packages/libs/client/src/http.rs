//! 요청/응답 공통 처리
//!
//! 모든 작업이 같은 규칙을 따릅니다: 상태 코드와 무관하게 본문을 JSON으로 파싱하고,
//! 2xx가 아니면 서버 `message` 또는 기본 메시지로 실패합니다.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::session::Session;

/// API 작업 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Signup,
    Login,
    GetProfile,
    UpdateProfile,
    GetTasks,
    CreateTask,
    UpdateTask,
    DeleteTask,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Signup,
        Operation::Login,
        Operation::GetProfile,
        Operation::UpdateProfile,
        Operation::GetTasks,
        Operation::CreateTask,
        Operation::UpdateTask,
        Operation::DeleteTask,
    ];

    pub fn method(&self) -> Method {
        match self {
            Operation::Signup | Operation::Login | Operation::CreateTask => Method::POST,
            Operation::GetProfile | Operation::GetTasks => Method::GET,
            Operation::UpdateProfile | Operation::UpdateTask => Method::PUT,
            Operation::DeleteTask => Method::DELETE,
        }
    }

    /// base URL 기준 리소스 경로 (task id 제외)
    pub fn endpoint(&self) -> &'static str {
        match self {
            Operation::Signup => "auth/signup",
            Operation::Login => "auth/login",
            Operation::GetProfile | Operation::UpdateProfile => "user/profile",
            Operation::GetTasks
            | Operation::CreateTask
            | Operation::UpdateTask
            | Operation::DeleteTask => "tasks",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Operation::Signup | Operation::Login)
    }

    /// 서버가 `message`를 주지 않았을 때의 메시지
    pub fn default_message(&self) -> &'static str {
        match self {
            Operation::Signup => "Signup failed",
            Operation::Login => "Login failed",
            Operation::GetProfile => "Failed to fetch profile",
            Operation::UpdateProfile => "Failed to update profile",
            Operation::GetTasks => "Failed to fetch tasks",
            Operation::CreateTask => "Failed to create task",
            Operation::UpdateTask => "Failed to update task",
            Operation::DeleteTask => "Failed to delete task",
        }
    }
}

/// 요청 헤더 생성
///
/// `include_auth`인데 토큰이 없으면 Authorization만 빠집니다.
pub fn build_headers(session: &Session, include_auth: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if !include_auth {
        return headers;
    }

    let token = match session.token() {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!("Failed to read session token: {}", e);
            None
        }
    };

    if let Some(token) = token {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => tracing::warn!("Stored token is not a valid header value; sending without it"),
        }
    }

    headers
}

/// 요청 전송 후 JSON 본문 반환
pub async fn send_json(op: Operation, req: RequestBuilder) -> Result<Value> {
    let resp = req.send().await?;
    let status = resp.status();
    let bytes = resp.bytes().await?;

    tracing::debug!(
        operation = ?op,
        status = status.as_u16(),
        bytes = bytes.len(),
        "response received"
    );

    let body = parse_body(&bytes)?;

    if !status.is_success() {
        return Err(Error::Request {
            status: status.as_u16(),
            message: error_message(op, &body),
        });
    }

    Ok(body)
}

/// 빈 본문은 `null`
fn parse_body(bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(bytes)?)
}

fn error_message(op: Operation, body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| op.default_message().to_string())
}
