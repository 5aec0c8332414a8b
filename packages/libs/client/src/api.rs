//! Notes REST 클라이언트
//!
//! auth, user profile, tasks(노트) 세 리소스 그룹에 대한 요청 래퍼입니다.
//! 재시도나 타임아웃 처리는 하지 않습니다.

use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{self, Operation};
use crate::models::{
    Acknowledgement, AuthSession, LoginRequest, Note, Profile, SignupRequest, TaskRequest,
    UpdateProfileRequest,
};
use crate::session::Session;

/// REST 클라이언트
///
/// 토큰은 매 요청마다 세션에서 새로 읽습니다.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self {
            http: Client::new(),
            config,
            session,
        }
    }

    /// `NOTES_API_URL` 기반 생성
    pub fn from_env(session: Session) -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?, session))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn save_token(&self, token: &str) -> Result<()> {
        self.session.save_token(token)
    }

    pub fn remove_token(&self) -> Result<()> {
        self.session.remove_token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn headers(&self, include_auth: bool) -> HeaderMap {
        http::build_headers(&self.session, include_auth)
    }

    /// 공통 요청. 성공 시 파싱된 본문을 그대로 반환
    pub async fn request_json<B>(
        &self,
        op: Operation,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        tracing::debug!(method = %op.method(), url = %url, "sending request");

        let mut req = self
            .http
            .request(op.method(), url)
            .headers(self.headers(op.requires_auth()));
        if let Some(body) = body {
            req = req.json(body);
        }

        http::send_json(op, req).await
    }

    async fn request<B, T>(&self, op: Operation, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.request_json(op, path, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    fn task_path(id: &str) -> String {
        format!("{}/{}", Operation::UpdateTask.endpoint(), id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Auth
    // ─────────────────────────────────────────────────────────────────────────

    /// 회원가입. 토큰 저장은 호출자 몫
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<AuthSession> {
        let op = Operation::Signup;
        self.request(op, op.endpoint(), Some(&SignupRequest { name, email, password }))
            .await
    }

    /// 로그인. 토큰 저장은 호출자 몫
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let op = Operation::Login;
        self.request(op, op.endpoint(), Some(&LoginRequest { email, password }))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // User
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn get_profile(&self) -> Result<Profile> {
        let op = Operation::GetProfile;
        self.request(op, op.endpoint(), None::<&()>).await
    }

    /// 프로필 수정. `password`가 비어 있으면 본문에서 제외
    pub async fn update_profile(
        &self,
        name: &str,
        email: &str,
        bio: Option<&str>,
        password: Option<&str>,
    ) -> Result<Profile> {
        let op = Operation::UpdateProfile;
        let body = UpdateProfileRequest::new(name, email, bio, password);
        self.request(op, op.endpoint(), Some(&body)).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tasks
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn get_tasks(&self) -> Result<Vec<Note>> {
        let op = Operation::GetTasks;
        self.request(op, op.endpoint(), None::<&()>).await
    }

    pub async fn create_task(&self, title: &str, content: &str) -> Result<Note> {
        let op = Operation::CreateTask;
        self.request(op, op.endpoint(), Some(&TaskRequest { title, content }))
            .await
    }

    pub async fn update_task(&self, id: &str, title: &str, content: &str) -> Result<Note> {
        self.request(
            Operation::UpdateTask,
            &Self::task_path(id),
            Some(&TaskRequest { title, content }),
        )
        .await
    }

    pub async fn delete_task(&self, id: &str) -> Result<Acknowledgement> {
        self.request(Operation::DeleteTask, &Self::task_path(id), None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum::http::{HeaderMap as AxumHeaders, Method, StatusCode, Uri};
    use axum::Router;
    use serde_json::json;

    use super::*;
    use crate::error::Error;

    #[derive(Debug, Clone)]
    struct Seen {
        method: String,
        path: String,
        auth: Option<String>,
        content_type: Option<String>,
        body: String,
    }

    #[derive(Clone)]
    struct Mock {
        status: StatusCode,
        body: String,
        seen: Arc<Mutex<Vec<Seen>>>,
    }

    async fn record(
        State(mock): State<Mock>,
        method: Method,
        uri: Uri,
        headers: AxumHeaders,
        body: String,
    ) -> (StatusCode, String) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        mock.seen.lock().unwrap().push(Seen {
            method: method.to_string(),
            path: uri.path().to_string(),
            auth: header("authorization"),
            content_type: header("content-type"),
            body,
        });
        (mock.status, mock.body.clone())
    }

    /// 고정 응답을 돌려주는 테스트 서버
    async fn mock_backend(status: u16, body: &str) -> (String, Arc<Mutex<Vec<Seen>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mock = Mock {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            seen: seen.clone(),
        };
        let app = Router::new().fallback(record).with_state(mock);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/api", addr), seen)
    }

    fn client(base_url: &str, token: Option<&str>) -> ApiClient {
        let session = Session::in_memory();
        if let Some(token) = token {
            session.save_token(token).unwrap();
        }
        ApiClient::new(ClientConfig::new(base_url).unwrap(), session)
    }

    fn last(seen: &Arc<Mutex<Vec<Seen>>>) -> Seen {
        seen.lock().unwrap().last().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_create_task_returns_server_note() {
        let body = r#"{"id":"n1","title":"T","content":"C","createdAt":"2024-01-01T00:00:00Z"}"#;
        let (url, seen) = mock_backend(201, body).await;
        let api = client(&url, Some("tok"));

        let note = api.create_task("T", "C").await.unwrap();
        assert_eq!(note.id(), Some("n1"));
        assert_eq!(note.title(), Some("T"));
        assert_eq!(note.content(), Some("C"));
        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            serde_json::from_str::<Value>(body).unwrap()
        );

        let req = last(&seen);
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/api/tasks");
        assert_eq!(req.auth.as_deref(), Some("Bearer tok"));
        assert_eq!(req.content_type.as_deref(), Some("application/json"));
        assert_eq!(
            serde_json::from_str::<Value>(&req.body).unwrap(),
            json!({ "title": "T", "content": "C" })
        );
    }

    #[tokio::test]
    async fn test_request_json_returns_body_verbatim() {
        let body = r#"{"id":"n1","title":"T","content":"C","createdAt":"2024-01-01T00:00:00Z"}"#;
        let (url, _) = mock_backend(201, body).await;
        let api = client(&url, Some("tok"));

        let value = api
            .request_json(
                Operation::CreateTask,
                "tasks",
                Some(&json!({ "title": "T", "content": "C" })),
            )
            .await
            .unwrap();
        assert_eq!(value, serde_json::from_str::<Value>(body).unwrap());
    }

    #[tokio::test]
    async fn test_server_message_is_surfaced() {
        let (url, seen) = mock_backend(401, r#"{"message":"Invalid token"}"#).await;
        let api = client(&url, Some("stale"));

        let err = api.get_profile().await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid token");
        assert!(err.is_unauthorized());

        let req = last(&seen);
        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/api/user/profile");
        assert_eq!(req.body, "");
    }

    #[tokio::test]
    async fn test_default_messages_on_server_error() {
        let (url, _) = mock_backend(500, r#"{"error":"internal"}"#).await;
        let api = client(&url, Some("tok"));

        let messages = vec![
            api.signup("A", "a@x.io", "pw").await.unwrap_err().to_string(),
            api.login("a@x.io", "pw").await.unwrap_err().to_string(),
            api.get_profile().await.unwrap_err().to_string(),
            api.update_profile("A", "a@x.io", None, None)
                .await
                .unwrap_err()
                .to_string(),
            api.get_tasks().await.unwrap_err().to_string(),
            api.create_task("T", "C").await.unwrap_err().to_string(),
            api.update_task("n1", "T", "C").await.unwrap_err().to_string(),
            api.delete_task("n1").await.unwrap_err().to_string(),
        ];

        let expected: Vec<String> = Operation::ALL
            .iter()
            .map(|op| op.default_message().to_string())
            .collect();
        assert_eq!(messages, expected);
    }

    #[tokio::test]
    async fn test_missing_token_omits_authorization() {
        let (url, seen) = mock_backend(401, r#"{"message":"No token"}"#).await;
        let api = client(&url, None);
        assert!(!api.is_authenticated());

        let err = api.get_tasks().await.unwrap_err();
        assert!(matches!(err, Error::Request { status: 401, .. }));

        let req = last(&seen);
        assert_eq!(req.path, "/api/tasks");
        assert!(req.auth.is_none());
    }

    #[tokio::test]
    async fn test_login_sends_no_authorization() {
        let (url, seen) = mock_backend(200, r#"{"token":"fresh","user":{"name":"A"}}"#).await;
        let api = client(&url, Some("old"));

        let session = api.login("a@x.io", "pw").await.unwrap();
        assert_eq!(session.token(), Some("fresh"));
        // 로그인은 토큰을 자동 저장하지 않는다
        assert_eq!(api.session().token().unwrap().as_deref(), Some("old"));

        let req = last(&seen);
        assert_eq!(req.path, "/api/auth/login");
        assert!(req.auth.is_none());
        assert_eq!(
            serde_json::from_str::<Value>(&req.body).unwrap(),
            json!({ "email": "a@x.io", "password": "pw" })
        );
    }

    #[tokio::test]
    async fn test_update_profile_password_handling() {
        let (url, seen) = mock_backend(200, r#"{"name":"A","email":"a@x.io","bio":"hi"}"#).await;
        let api = client(&url, Some("tok"));

        api.update_profile("A", "a@x.io", Some("hi"), Some(""))
            .await
            .unwrap();
        let body: Value = serde_json::from_str(&last(&seen).body).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body, json!({ "name": "A", "email": "a@x.io", "bio": "hi" }));

        let profile = api
            .update_profile("A", "a@x.io", Some("hi"), Some("newpass"))
            .await
            .unwrap();
        let req = last(&seen);
        assert_eq!(req.method, "PUT");
        let body: Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body["password"], "newpass");
        assert_eq!(profile.bio(), Some("hi"));
    }

    #[tokio::test]
    async fn test_task_id_paths() {
        let (url, seen) = mock_backend(200, r#"{"_id":"n9","title":"T2","content":"C2"}"#).await;
        let api = client(&url, Some("tok"));

        let note = api.update_task("n9", "T2", "C2").await.unwrap();
        assert_eq!(note.id(), Some("n9"));
        let req = last(&seen);
        assert_eq!(req.method, "PUT");
        assert_eq!(req.path, "/api/tasks/n9");

        api.delete_task("n9").await.unwrap();
        let req = last(&seen);
        assert_eq!(req.method, "DELETE");
        assert_eq!(req.path, "/api/tasks/n9");
        assert_eq!(req.body, "");
    }

    #[tokio::test]
    async fn test_create_task_keeps_unusual_note_shapes() {
        let bodies = [
            r#"{"_id":"n1","title":"T","content":"C","createdAt":1704067200000}"#,
            r#"{"_id":"n1","title":"T","content":null}"#,
            r#"{"_id":"n1","title":"T","content":"C","createdAt":"2024-01-01T00:00:00.000Z","__v":0}"#,
        ];

        for body in bodies {
            let (url, _) = mock_backend(201, body).await;
            let api = client(&url, Some("tok"));

            let note = api.create_task("T", "C").await.unwrap();
            assert_eq!(note.id(), Some("n1"));
            assert_eq!(
                serde_json::to_string(&note).unwrap(),
                serde_json::to_string(&serde_json::from_str::<Value>(body).unwrap()).unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_empty_delete_body_is_null_ack() {
        let (url, _) = mock_backend(200, "").await;
        let api = client(&url, Some("tok"));

        let ack = api.delete_task("n1").await.unwrap();
        assert_eq!(ack.message(), None);
        assert_eq!(ack.as_value(), &Value::Null);
    }

    #[tokio::test]
    async fn test_get_tasks_list() {
        let (url, _) = mock_backend(
            200,
            r#"[{"_id":"a","title":"1","content":"x"},{"_id":"b","title":"2","content":"y"}]"#,
        )
        .await;
        let api = client(&url, Some("tok"));

        let notes = api.get_tasks().await.unwrap();
        let ids: Vec<_> = notes.iter().filter_map(|n| n.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_delete_ack() {
        let (url, _) = mock_backend(200, r#"{"message":"Task deleted"}"#).await;
        let api = client(&url, Some("tok"));

        let ack = api.delete_task("n1").await.unwrap();
        assert_eq!(ack.message(), Some("Task deleted"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let (url, _) = mock_backend(502, "<html>Bad Gateway</html>").await;
        let api = client(&url, Some("tok"));

        let err = api.get_tasks().await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = client(&format!("http://{}/api", addr), Some("tok"));
        let err = api.get_tasks().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
