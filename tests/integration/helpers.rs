//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use moviehub_api::state::AppState;
use moviehub_auth::{PasswordHasher, SessionManager};
use moviehub_core::config::AppConfig;
use moviehub_database::connection::DatabasePool;
use moviehub_database::repositories::movie::MovieRepository;
use moviehub_database::repositories::session::SessionRepository;
use moviehub_database::repositories::user::UserRepository;
use moviehub_entity::user::CreateUser;
use moviehub_service::{MovieService, UserService};
use moviehub_storage::UploadStore;

/// Multipart boundary used by all test requests.
pub const BOUNDARY: &str = "----moviehub-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
    /// User repository for seeding test data
    pub user_repo: Arc<UserRepository>,
    // Holds the static-root tempdir for the test's lifetime.
    static_dir: tempfile::TempDir,
}

impl TestApp {
    /// Create a new test application backed by the `test` config overlay.
    pub async fn new() -> Self {
        let mut config = AppConfig::load("test").expect("Failed to load test config");

        let static_dir = tempfile::tempdir().expect("Failed to create static tempdir");
        config.storage.static_root = static_dir.path().display().to_string();

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        moviehub_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.pool().clone();
        Self::clean_database(&db_pool).await;

        let uploads = Arc::new(
            UploadStore::new(&config.storage.static_root)
                .await
                .expect("Failed to init upload store"),
        );

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let movie_repo = Arc::new(MovieRepository::new(db_pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));

        let hasher = PasswordHasher::new();
        let session_manager = Arc::new(SessionManager::new(Arc::clone(&session_repo)));
        let movie_service = Arc::new(MovieService::new(
            Arc::clone(&movie_repo),
            Arc::clone(&uploads),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&uploads),
            hasher,
        ));

        let state = AppState {
            config: Arc::new(config.clone()),
            db,
            session_manager,
            user_repo: Arc::clone(&user_repo),
            movie_service,
            user_service,
        };

        let router = moviehub_api::build_router(state);

        Self {
            router,
            db_pool,
            config,
            user_repo,
            static_dir,
        }
    }

    /// Whether a stored relative upload path exists under the static root.
    pub fn upload_exists(&self, relative_path: &str) -> bool {
        self.static_dir.path().join(relative_path).exists()
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        for table in ["sessions", "movies", "users"] {
            let query = format!("DELETE FROM {table}");
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user directly in the database and return their ID.
    pub async fn create_test_user(&self, username: &str, password: &str) -> i64 {
        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash_password(password).expect("Failed to hash");

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: format!("{username}@test.com"),
                password_hash,
                bio: None,
                profile_photo: None,
            })
            .await
            .expect("Failed to create test user");

        user.id
    }

    /// Login and return the session cookie to send on later requests.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": format!("{username}@test.com"),
            "password": password,
        });

        let response = self.request("POST", "/api/login", Some(body), None).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .session_cookie(&self.config.session.cookie_name)
            .expect("No session cookie in login response")
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::HOST, "localhost:6543")
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a multipart form request to the test app.
    pub async fn multipart_request(
        &self,
        method: &str,
        path: &str,
        fields: &[(&str, &str)],
        file: Option<(&str, &str, &[u8])>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body = multipart_body(fields, file);

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::HOST, "localhost:6543")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Builds a multipart/form-data body with the shared test boundary.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((name, filename, data)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Extracts the `name=value` pair of the session cookie from
    /// `Set-Cookie`, if present and not a removal.
    pub fn session_cookie(&self, cookie_name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .map(str::trim)
            .find(|pair| {
                pair.starts_with(&format!("{cookie_name}=")) && !pair.ends_with('=')
            })
            .map(String::from)
    }
}
