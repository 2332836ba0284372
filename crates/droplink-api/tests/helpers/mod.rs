//! Shared test helpers: in-memory fakes for the collaborator traits and a
//! `TestApp` that drives the real router through `tower::ServiceExt`.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use bytes::Bytes;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use droplink_api::app::build_app;
use droplink_api::state::AppState;
use droplink_auth::JwtVerifier;
use droplink_auth::verifier::Claims;
use droplink_core::config::{
    AppConfig, AuthConfig, LedgerConfig, LoggingConfig, ServerConfig, StorageConfig,
};
use droplink_core::error::AppError;
use droplink_core::model::{DeleteOutcome, OwnershipRecord, StoredObjectRef};
use droplink_core::result::AppResult;
use droplink_core::traits::{ObjectStore, OwnershipLedger, TokenVerifier};

/// HMAC secret the test verifier and minted tokens share.
pub const TEST_SECRET: &str = "integration-test-secret";

const BOUNDARY: &str = "droplink-test-boundary";

/// In-memory object store tracking every gateway call.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    /// Identifiers currently "stored" at the fake provider.
    pub objects: Mutex<Vec<String>>,
    /// Number of `put` calls made.
    pub put_calls: AtomicUsize,
    /// Number of `delete` calls made.
    pub delete_calls: AtomicUsize,
    /// Identifier the most recent `delete` call received.
    pub last_deleted: Mutex<Option<String>>,
    /// When set, every `put` fails as a provider upload error.
    pub fail_put: AtomicBool,
}

impl MemoryObjectStore {
    pub fn with_objects(ids: &[&str]) -> Self {
        Self {
            objects: Mutex::new(ids.iter().map(|s| s.to_string()).collect()),
            ..Self::default()
        }
    }

    fn url_for(object_id: &str) -> String {
        format!("https://cdn.example/upload/v1/{object_id}.webp")
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, name: &str, _data: Bytes) -> AppResult<StoredObjectRef> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_put.load(Ordering::SeqCst) {
            return Err(AppError::storage_upload("Provider rejected the upload"));
        }
        let object_id = format!("uploads/{name}");
        self.objects.lock().unwrap().push(object_id.clone());
        Ok(StoredObjectRef {
            url: Self::url_for(&object_id),
            object_id,
        })
    }

    async fn delete(&self, object_id: &str) -> AppResult<DeleteOutcome> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_deleted.lock().unwrap() = Some(object_id.to_string());

        let mut objects = self.objects.lock().unwrap();
        match objects.iter().position(|o| o == object_id) {
            Some(i) => {
                objects.remove(i);
                Ok(DeleteOutcome::Deleted)
            }
            None => Ok(DeleteOutcome::NotFound),
        }
    }

    async fn list(&self, folder: &str) -> AppResult<Vec<StoredObjectRef>> {
        let prefix = format!("{folder}/");
        Ok(self
            .objects
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.starts_with(&prefix))
            .map(|o| StoredObjectRef {
                object_id: o.clone(),
                url: Self::url_for(o),
            })
            .collect())
    }
}

/// In-memory ownership ledger tracking every call.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    /// Live records.
    pub records: Mutex<Vec<OwnershipRecord>>,
    /// Number of lookup calls (by object id or record id).
    pub lookup_calls: AtomicUsize,
    /// Number of delete calls.
    pub delete_calls: AtomicUsize,
    /// When set, every `delete_by_object_id` fails as a ledger error.
    pub fail_delete: AtomicBool,
}

impl MemoryLedger {
    pub fn with_records(records: Vec<OwnershipRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }
}

#[async_trait]
impl OwnershipLedger for MemoryLedger {
    async fn find_by_object_id(&self, object_id: &str) -> AppResult<Option<OwnershipRecord>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.object_id == object_id)
            .cloned())
    }

    async fn find_by_id(&self, record_id: Uuid) -> AppResult<Option<OwnershipRecord>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == record_id)
            .cloned())
    }

    async fn delete_by_object_id(&self, object_id: &str) -> AppResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(AppError::ledger("Ledger connection lost"));
        }
        self.records
            .lock()
            .unwrap()
            .retain(|r| r.object_id != object_id);
        Ok(())
    }
}

/// Build an ownership record for seeding the fake ledger.
pub fn record(object_id: &str, owner_id: Uuid) -> OwnershipRecord {
    OwnershipRecord {
        id: Uuid::new_v4(),
        object_id: object_id.to_string(),
        owner_id,
        created_at: chrono::Utc::now(),
    }
}

/// Mint a signed bearer token for the given user, valid for ten minutes.
pub fn token_for(user_id: Uuid) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &Claims {
            sub: user_id,
            exp: chrono::Utc::now().timestamp() + 600,
        },
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// A response with its JSON body decoded.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test application: the real router over in-memory fakes.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryObjectStore>,
    pub ledger: Arc<MemoryLedger>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(MemoryObjectStore::default(), MemoryLedger::default())
    }

    pub fn with(store: MemoryObjectStore, ledger: MemoryLedger) -> Self {
        let store = Arc::new(store);
        let ledger = Arc::new(ledger);
        let config = test_config();

        let state = AppState {
            config: Arc::new(config.clone()),
            store: Arc::clone(&store) as Arc<dyn ObjectStore>,
            ledger: Arc::clone(&ledger) as Arc<dyn OwnershipLedger>,
            verifier: Arc::new(JwtVerifier::new(&config.auth)) as Arc<dyn TokenVerifier>,
        };

        let router = build_app(state, &config.server.cors);

        Self {
            router,
            store,
            ledger,
        }
    }

    /// Send a request with an optional JSON body and bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Send a request with a raw body and an explicit content type, for
    /// exercising payloads the JSON helpers cannot produce.
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: &str,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, content_type);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Upload a single file through the multipart endpoint.
    pub async fn upload(&self, file_name: &str, content: &[u8]) -> TestResponse {
        self.send_multipart(multipart_file(file_name, content)).await
    }

    /// Post a multipart body that carries no `file` field at all.
    pub async fn upload_without_file(&self) -> TestResponse {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{BOUNDARY}--\r\n"
        );
        self.send_multipart(body.into_bytes()).await
    }

    async fn send_multipart(&self, body: Vec<u8>) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }
}

fn multipart_file(file_name: &str, content: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        storage: StorageConfig {
            base_url: "http://provider.invalid".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            folder: "uploads".to_string(),
            upload_timeout_seconds: 5,
            delete_timeout_seconds: 5,
        },
        ledger: LedgerConfig {
            url: "postgres://unused.invalid/ledger".to_string(),
            max_connections: 1,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            leeway_seconds: 5,
        },
        logging: LoggingConfig::default(),
    }
}
