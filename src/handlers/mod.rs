//! # HTTP Handlers Module
//!
//! actix-web 핸들러 함수들입니다. 모든 핸들러는 `web::Data<AppContext>`로
//! 서비스를 받고, 실패는 `AppError`로 돌려서 `ResponseError`가 상태 코드와
//! JSON 본문을 결정하게 합니다.
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`tags`] | `GET /tags/{tag}` |
//! | [`users`] | `POST /api/v1/users` |
//! | [`auth`] | `/api/v1/auth/...` (로컬 로그인, OAuth, 현재 사용자) |

pub mod auth;
pub mod users;
pub mod tags;

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, web, App};
    use mongodb::bson::DateTime;
    use serde_json::{json, Value};
    use crate::{
        config::{AuthProvider, OAuthProviderConfig},
        core::AppContext,
        domain::entities::articles::article::Article,
        repositories::memory::{InMemoryArticleStore, InMemoryStateStore, InMemoryUserStore},
        routes::configure_all_routes,
        services::auth::TokenService,
    };

    fn context(articles: Vec<Article>) -> web::Data<AppContext> {
        let github = OAuthProviderConfig::with_defaults(
            AuthProvider::GitHub,
            "client-id".to_string(),
            "client-secret".to_string(),
            "http://localhost:8080/api/v1/auth/github/callback".to_string(),
        )
        .unwrap();

        web::Data::new(AppContext::with_oauth_providers(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryArticleStore::with_articles(articles)),
            Arc::new(InMemoryStateStore::new()),
            vec![github],
            TokenService::new("handler-test-secret", 1),
            4,
        ))
    }

    fn tagged(count: i64, tag: &str) -> Vec<Article> {
        (0..count)
            .map(|i| {
                let mut article = Article::new(format!("post {}", i), String::new(), vec![tag.to_string()]);
                article.created_at = DateTime::from_millis(i * 1_000);
                article
            })
            .collect()
    }

    fn registration() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "username": "jane_doe",
            "password": "password123"
        })
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().app_data(context(vec![])).configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_tag_listing_view() {
        let app = test::init_service(
            App::new().app_data(context(tagged(45, "rust"))).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/tags/rust?page=0").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["title"], "Articles tagged rust");
        assert_eq!(body["articles"].as_array().unwrap().len(), 30);
        assert_eq!(body["page"], 1);
        assert_eq!(body["pages"], 2);
    }

    #[actix_web::test]
    async fn test_tag_listing_with_non_numeric_page() {
        let app = test::init_service(
            App::new().app_data(context(tagged(3, "rust"))).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/tags/rust?page=abc").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["page"], 1);
        assert_eq!(body["articles"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_register_login_and_me() {
        let app = test::init_service(App::new().app_data(context(vec![])).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(registration())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "jane@example.com", "password": "password123" }))
            .to_request();
        let login: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(login["token_type"], "Bearer");
        assert_eq!(login["user"]["provider"], "local");
        let token = login["access_token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["email"], "jane@example.com");
        assert!(me.get("hashed_password").is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_registration_conflicts() {
        let app = test::init_service(App::new().app_data(context(vec![])).configure(configure_all_routes)).await;

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(registration())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_login_soft_failures_are_unauthorized() {
        let app = test::init_service(App::new().app_data(context(vec![])).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "nobody@example.com", "password": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unknown user");

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(registration())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "jane@example.com", "password": "wrong-password" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid password");
    }

    #[actix_web::test]
    async fn test_oauth_login_url() {
        let app = test::init_service(App::new().app_data(context(vec![])).configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/auth/github/login").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["login_url"]
            .as_str()
            .unwrap()
            .starts_with("https://github.com/login/oauth/authorize?"));
        assert!(body["state"].as_str().is_some());

        for uri in [
            "/api/v1/auth/facebook/login",
            "/api/v1/auth/local/login",
            "/api/v1/auth/google/login",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_oauth_callback_rejections() {
        let app = test::init_service(App::new().app_data(context(vec![])).configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/github/callback?error=access_denied")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/github/callback?code=abc&state=forged")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/github/callback")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_me_requires_valid_token() {
        let app = test::init_service(App::new().app_data(context(vec![])).configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
