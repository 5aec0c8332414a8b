//! API 모델
//!
//! 응답 모델은 서버가 보낸 JSON을 그대로 감쌉니다. 역직렬화에서 모양을 검증하지 않고,
//! 직렬화하면 받은 본문과 동일한 JSON이 나옵니다. 필드는 접근자로 읽습니다.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// 노트 ("task")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(Value);

impl Note {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// `id` 또는 `_id`
    pub fn id(&self) -> Option<&str> {
        str_field(&self.0, "id").or_else(|| str_field(&self.0, "_id"))
    }

    pub fn title(&self) -> Option<&str> {
        str_field(&self.0, "title")
    }

    pub fn content(&self) -> Option<&str> {
        str_field(&self.0, "content")
    }

    /// `createdAt` (RFC 3339 문자열 또는 epoch 밀리초)
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        match self.0.get("createdAt")? {
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Value::Number(n) => n
                .as_i64()
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// 사용자 프로필
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Value);

impl Profile {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn name(&self) -> Option<&str> {
        str_field(&self.0, "name")
    }

    pub fn email(&self) -> Option<&str> {
        str_field(&self.0, "email")
    }

    pub fn bio(&self) -> Option<&str> {
        str_field(&self.0, "bio")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// signup/login 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthSession(Value);

impl AuthSession {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// 비어 있지 않은 토큰
    pub fn token(&self) -> Option<&str> {
        str_field(&self.0, "token").filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<&Value> {
        self.0.get("user")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// 삭제 응답 (빈 본문이면 `null`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acknowledgement(Value);

impl Acknowledgement {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn message(&self) -> Option<&str> {
        str_field(&self.0, "message")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request bodies
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateProfileRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
}

impl<'a> UpdateProfileRequest<'a> {
    /// 빈 비밀번호는 "변경 안 함"
    pub fn new(
        name: &'a str,
        email: &'a str,
        bio: Option<&'a str>,
        password: Option<&'a str>,
    ) -> Self {
        Self {
            name,
            email,
            bio,
            password: password.filter(|p| !p.is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TaskRequest<'a> {
    pub title: &'a str,
    pub content: &'a str,
}
