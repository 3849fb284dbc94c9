//! # 라우트 구성
//!
//! ```text
//! GET  /health
//! GET  /tags/{tag}?page=N
//! POST /api/v1/users
//! POST /api/v1/auth/login
//! GET  /api/v1/auth/me
//! GET  /api/v1/auth/{provider}/login
//! GET  /api/v1/auth/{provider}/callback?code&state
//! ```
//!
//! `AppContext`는 `main`에서 `app_data`로 등록됩니다.

use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_tag_routes(cfg);
    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

fn configure_tag_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::tags::list_by_tag);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            // 로컬 인증
            .service(handlers::auth::local_login)
            .service(handlers::auth::current_user)
            // GitHub, Google, LinkedIn, Twitter
            .service(handlers::auth::oauth_login_url)
            .service(handlers::auth::oauth_callback)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "tagboard",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "oauth_state": "Redis",
            "auth_providers": ["local", "github", "google", "linkedin", "twitter"]
        }
    }))
}
