//! 세션 토큰 관리
//!
//! 인증 여부는 저장된 bearer 토큰의 존재만으로 결정됩니다.
//! 만료 검사나 갱신은 하지 않습니다.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 토큰 저장소
///
/// 한 번에 최대 하나의 토큰만 보관합니다.
pub trait TokenStore: Send + Sync {
    /// 저장된 토큰 조회
    fn load(&self) -> Result<Option<String>>;

    /// 토큰 저장 (기존 값 덮어쓰기)
    fn store(&self, token: &str) -> Result<()>;

    /// 토큰 삭제. 없으면 no-op
    fn clear(&self) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// File store
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
struct TokenFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// JSON 파일 기반 토큰 저장소 (`{"token": "..."}`)
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let file: TokenFile = serde_json::from_str(&content).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("corrupt session file {}: {}", self.path.display(), e),
            )
        })?;
        Ok(file.token)
    }

    fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&TokenFile {
            token: Some(token.to_string()),
        })?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory store
// ─────────────────────────────────────────────────────────────────────────────

/// 프로세스 메모리 토큰 저장소
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let guard = self.token.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn store(&self, token: &str) -> Result<()> {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// 세션 컨텍스트
///
/// 저장소가 없는 세션(detached)은 저장/삭제가 no-op이고 항상 미인증입니다.
#[derive(Clone, Default)]
pub struct Session {
    store: Option<Arc<dyn TokenStore>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("detached", &self.store.is_none())
            .finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn detached() -> Self {
        Self { store: None }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileTokenStore::new(path)))
    }

    pub fn is_detached(&self) -> bool {
        self.store.is_none()
    }

    /// 토큰 저장
    pub fn save_token(&self, token: &str) -> Result<()> {
        match &self.store {
            Some(store) => store.store(token),
            None => Ok(()),
        }
    }

    /// 토큰 삭제
    pub fn remove_token(&self) -> Result<()> {
        match &self.store {
            Some(store) => store.clear(),
            None => Ok(()),
        }
    }

    /// 현재 토큰 (빈 문자열은 없는 것으로 취급)
    pub fn token(&self) -> Result<Option<String>> {
        let Some(store) = &self.store else {
            return Ok(None);
        };
        Ok(store.load()?.filter(|t| !t.is_empty()))
    }

    /// 인증 여부. 저장소를 읽지 못하면 미인증
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                tracing::warn!("Failed to read session token: {}", e);
                false
            }
        }
    }
}
