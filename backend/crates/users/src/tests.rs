//! Unit tests for users crate

#[cfg(test)]
mod support {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use kernel::document::Document;

    use crate::application::{AddressInput, CreateUserInput};
    use crate::domain::entity::User;
    use crate::domain::repository::UserRepository;
    use crate::error::{UsersError, UsersResult};
    use crate::infra::memory::InMemoryUserRepository;

    #[derive(Clone, Copy, PartialEq, Eq)]
    pub enum Mode {
        Store,
        Fail,
        Hang,
    }

    /// Repository fake counting calls
    #[derive(Clone)]
    pub struct FakeUserRepository {
        pub inner: InMemoryUserRepository,
        writes: Arc<AtomicUsize>,
        reads: Arc<AtomicUsize>,
        mode: Mode,
    }

    impl FakeUserRepository {
        pub fn new(mode: Mode) -> Self {
            Self {
                inner: InMemoryUserRepository::new(),
                writes: Arc::new(AtomicUsize::new(0)),
                reads: Arc::new(AtomicUsize::new(0)),
                mode,
            }
        }

        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        pub fn read_count(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    impl UserRepository for FakeUserRepository {
        async fn write(&self, user: &User) -> UsersResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                Mode::Store => self.inner.write(user).await,
                Mode::Fail => Err(UsersError::Database(sqlx::Error::PoolTimedOut)),
                Mode::Hang => std::future::pending().await,
            }
        }

        async fn read_by_key(&self, document: &Document) -> UsersResult<User> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                Mode::Store => self.inner.read_by_key(document).await,
                Mode::Fail => Err(UsersError::Database(sqlx::Error::PoolTimedOut)),
                Mode::Hang => std::future::pending().await,
            }
        }
    }

    pub fn valid_input() -> CreateUserInput {
        CreateUserInput {
            document: "12345678901".to_string(),
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            address: Some(AddressInput {
                street: "Av. Paulista".to_string(),
                number: "1000".to_string(),
                neighborhood: "Bela Vista".to_string(),
                city: "Sao Paulo".to_string(),
                state: "SP".to_string(),
                zip_code: "01310100".to_string(),
                complement: Some("Apto 12".to_string()),
            }),
            profile_image_file_name: Some("profile.jpg".to_string()),
        }
    }
}

#[cfg(test)]
mod create_user_tests {
    use std::sync::Arc;

    use kernel::error::kind::ErrorKind;
    use tokio_util::sync::CancellationToken;

    use super::support::{FakeUserRepository, Mode, valid_input};
    use crate::application::{CreateUserInput, CreateUserUseCase, GetUserByDocumentUseCase};
    use crate::application::config::UsersConfig;

    fn use_case(repo: &Arc<FakeUserRepository>) -> CreateUserUseCase<FakeUserRepository> {
        CreateUserUseCase::new(repo.clone(), Arc::new(UsersConfig::default()))
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Store));
        let cancel = CancellationToken::new();

        let created = use_case(&repo).execute(valid_input(), &cancel).await.unwrap();
        let found = GetUserByDocumentUseCase::new(repo.clone())
            .execute("12345678901", &cancel)
            .await
            .unwrap();

        assert_eq!(found.name, created.name);
        assert_eq!(found.email, created.email);
        assert_eq!(found, created);
        assert!(
            created
                .profile_image
                .as_ref()
                .unwrap()
                .bucket_path()
                .starts_with("s3://rentifyx-profile-images/")
        );
    }

    #[tokio::test]
    async fn test_validation_failure_skips_store() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Store));

        let input = CreateUserInput {
            name: String::new(),
            ..valid_input()
        };
        let errors = use_case(&repo)
            .execute(input, &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(errors.codes(), vec!["EMPTY_NAME", "NAME_MIN_LENGTH"]);
        assert_eq!(repo.write_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_address_is_single_validation_error() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Store));

        let input = CreateUserInput {
            address: None,
            ..valid_input()
        };
        let errors = use_case(&repo)
            .execute(input, &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.kind(), ErrorKind::Validation);
        assert_eq!(errors.codes(), vec!["EMPTY_ADDRESS"]);
        assert_eq!(repo.write_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failure() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Fail));

        let errors = use_case(&repo)
            .execute(valid_input(), &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(errors.kind(), ErrorKind::Unexpected);
        assert_eq!(errors.codes(), vec!["Repository.Error"]);
        assert_eq!(repo.write_count(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_during_write() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Hang));
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            trigger.cancel();
        });

        let errors = use_case(&repo)
            .execute(valid_input(), &cancel)
            .await
            .unwrap_err();
        assert_eq!(errors.kind(), ErrorKind::Cancelled);
    }
}

#[cfg(test)]
mod get_user_tests {
    use std::sync::Arc;

    use kernel::error::kind::ErrorKind;
    use tokio_util::sync::CancellationToken;

    use super::support::{FakeUserRepository, Mode, valid_input};
    use crate::application::config::UsersConfig;
    use crate::application::{CreateUserUseCase, GetUserByDocumentUseCase};

    async fn get(repo: &Arc<FakeUserRepository>, document: &str) -> kernel::error::errors::AppErrors {
        GetUserByDocumentUseCase::new(repo.clone())
            .execute(document, &CancellationToken::new())
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_blank_document() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Store));

        for raw in ["", "   "] {
            let errors = get(&repo, raw).await;
            assert_eq!(errors.codes(), vec!["User.Document.Empty"]);
            assert_eq!(errors.first().description(), "The document cannot be empty.");
        }
        assert_eq!(repo.read_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_format_skips_store() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Store));

        let errors = get(&repo, "123").await;
        assert_eq!(errors.codes(), vec!["User.Document.InvalidFormat"]);
        assert_eq!(
            errors.first().description(),
            "The document must have 11 or 14 characters."
        );
        assert_eq!(repo.read_count(), 0);
    }

    #[tokio::test]
    async fn test_padded_document_is_trimmed_before_read() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Store));
        let cancel = CancellationToken::new();
        let created = CreateUserUseCase::new(repo.clone(), Arc::new(UsersConfig::default()))
            .execute(valid_input(), &cancel)
            .await
            .unwrap();

        let found = GetUserByDocumentUseCase::new(repo.clone())
            .execute("  12345678901 ", &cancel)
            .await
            .unwrap();

        assert_eq!(found, created);
        assert_eq!(found.document.as_str(), "12345678901");
        assert_eq!(repo.read_count(), 1);
    }

    #[tokio::test]
    async fn test_not_found() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Store));

        let errors = get(&repo, "12345678000190").await;
        assert_eq!(errors.kind(), ErrorKind::NotFound);
        assert_eq!(errors.codes(), vec!["User.NotFound"]);
        assert_eq!(
            errors.first().description(),
            "User with document '12345678000190' was not found."
        );
        assert_eq!(repo.read_count(), 1);
    }

    #[tokio::test]
    async fn test_store_failure() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Fail));

        let errors = get(&repo, "12345678901").await;
        assert_eq!(errors.kind(), ErrorKind::Unexpected);
        assert_eq!(errors.codes(), vec!["Repository.Error"]);
    }

    #[tokio::test]
    async fn test_cancelled_before_read() {
        let repo = Arc::new(FakeUserRepository::new(Mode::Hang));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let errors = GetUserByDocumentUseCase::new(repo.clone())
            .execute("12345678901", &cancel)
            .await
            .unwrap_err();
        assert_eq!(errors.codes(), vec!["Request.Cancelled"]);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::support::{FakeUserRepository, Mode};
    use crate::application::config::UsersConfig;
    use crate::presentation::router::users_router_generic;

    fn create_body() -> serde_json::Value {
        serde_json::json!({
            "document": "12345678901",
            "name": "Maria Silva",
            "email": "maria@example.com",
            "address": {
                "street": "Av. Paulista",
                "number": "1000",
                "neighborhood": "Bela Vista",
                "city": "Sao Paulo",
                "state": "SP",
                "zipCode": "01310100",
            },
            "profileImageFileName": "profile.jpg",
        })
    }

    fn post_json(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = FakeUserRepository::new(Mode::Store);
        let app = users_router_generic(repo, UsersConfig::default());

        let response = app.clone().oneshot(post_json(create_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/api/v1/users/12345678901"
        );

        let response = app.oneshot(get("/api/v1/users/12345678901")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["document"], "12345678901");
        assert_eq!(body["name"], "Maria Silva");
        assert_eq!(body["address"]["zipCode"], "01310100");
        assert!(
            body["profileImage"]["key"]
                .as_str()
                .unwrap()
                .ends_with(".jpg")
        );
    }

    #[tokio::test]
    async fn test_get_unknown_is_404() {
        let app = users_router_generic(FakeUserRepository::new(Mode::Store), UsersConfig::default());

        let response = app.oneshot(get("/api/v1/users/12345678000190")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["code"], "User.NotFound");
    }

    #[tokio::test]
    async fn test_get_malformed_is_422() {
        let app = users_router_generic(FakeUserRepository::new(Mode::Store), UsersConfig::default());

        let response = app.oneshot(get("/api/v1/users/123")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(response).await;
        assert!(body["errors"]["User.Document.InvalidFormat"].is_array());
    }

    #[tokio::test]
    async fn test_create_without_address_is_422() {
        let app = users_router_generic(FakeUserRepository::new(Mode::Store), UsersConfig::default());

        let mut body = create_body();
        body.as_object_mut().unwrap().remove("address");

        let response = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(response).await;
        assert!(body["errors"]["EMPTY_ADDRESS"].is_array());
    }

    #[tokio::test]
    async fn test_location_is_percent_encoded() {
        let repo = FakeUserRepository::new(Mode::Store);
        let app = users_router_generic(repo.clone(), UsersConfig::default());

        let mut body = create_body();
        body["document"] = serde_json::json!("1234567890\u{1}");

        let response = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert_eq!(location, "/api/v1/users/1234567890%01");
        assert_eq!(repo.write_count(), 1);
    }

    #[tokio::test]
    async fn test_mistyped_body_is_validation_error() {
        let repo = FakeUserRepository::new(Mode::Store);
        let app = users_router_generic(repo.clone(), UsersConfig::default());

        let mut body = create_body();
        body["address"] = serde_json::json!("Av. Paulista, 1000");

        let response = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(response).await;
        assert!(body["errors"]["Request.Body.Invalid"].is_array());
        assert_eq!(repo.write_count(), 0);
    }
}
