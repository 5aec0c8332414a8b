//! 명령어 테스트용 백엔드와 설정

use std::path::{Path, PathBuf};

use axum::extract::State;
use axum::http::StatusCode;
use axum::Router;
use tempfile::TempDir;

use crate::config::CliConfig;

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
}

async fn reply(State(reply): State<Reply>) -> (StatusCode, String) {
    (reply.status, reply.body.clone())
}

/// 모든 요청에 같은 응답을 주는 백엔드를 띄우고 그 API URL 반환
pub async fn backend(status: u16, body: &str) -> String {
    let app = Router::new().fallback(reply).with_state(Reply {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

/// 임시 세션 파일을 쓰는 설정
pub fn config(dir: &TempDir, api_url: &str) -> CliConfig {
    CliConfig {
        api_url: Some(api_url.to_string()),
        session_file: Some(dir.path().join("session.json")),
    }
}

pub fn session_file(config: &CliConfig) -> PathBuf {
    config.session_file.clone().unwrap()
}

pub fn write_token(path: &Path, token: &str) {
    std::fs::write(path, serde_json::json!({ "token": token }).to_string()).unwrap();
}

pub fn read_token(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    value["token"].as_str().map(str::to_string)
}
