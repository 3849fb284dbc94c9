//! Authentication HTTP Handlers
//!
//! 로그인 요청을 자격 증명으로 바꿔 코디네이터에 넘기고, 결과를 HTTP 응답으로
//! 변환합니다.
//!
//! | 결과 | 응답 |
//! |------|------|
//! | 성공 | 200 + 세션 토큰 (`LoginResponse`) |
//! | 거절 | 401 + `{"error": "<사유>"}` |
//! | 장애 | 500 (`AppError`) |

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::{
    config::AuthProvider,
    core::AppContext,
    domain::dto::users::request::{LocalLoginRequest, OAuthCallbackQuery},
    domain::dto::users::response::{LoginResponse, UserResponse},
    domain::models::auth::{AuthOutcome, Credentials},
    errors::AppError,
};

/// 인증 결과를 응답으로 변환하고, 성공 시 세션 토큰을 발급합니다.
fn login_response(ctx: &AppContext, outcome: AuthOutcome) -> Result<HttpResponse, AppError> {
    match outcome {
        AuthOutcome::Success(user) => {
            let token = ctx.tokens.issue(&user)?;
            Ok(HttpResponse::Ok().json(LoginResponse::new(user, token)))
        }
        AuthOutcome::Failure(failure) => Ok(HttpResponse::Unauthorized().json(json!({
            "error": failure.message
        }))),
    }
}

/// 외부 프로바이더 경로 파라미터 파싱. 로컬이나 전략이 없는 값은 404입니다.
fn external_provider(ctx: &AppContext, raw: &str) -> Result<AuthProvider, AppError> {
    AuthProvider::from_str(raw)
        .ok()
        .filter(AuthProvider::is_external)
        .filter(|provider| ctx.authenticator.supports(*provider))
        .ok_or_else(|| AppError::NotFound(format!("지원하지 않는 OAuth 프로바이더입니다: {}", raw)))
}

#[post("/login")]
pub async fn local_login(
    ctx: web::Data<AppContext>,
    payload: web::Json<LocalLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let LocalLoginRequest { email, password } = payload.into_inner();
    let outcome = ctx
        .authenticator
        .authenticate(Credentials::Password { email, password })
        .await?;

    login_response(&ctx, outcome)
}

#[get("/{provider}/login")]
pub async fn oauth_login_url(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let provider = external_provider(&ctx, &path)?;
    let url_response = ctx.oauth.login_url(provider).await?;

    Ok(HttpResponse::Ok().json(url_response))
}

#[get("/{provider}/callback")]
pub async fn oauth_callback(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let provider = external_provider(&ctx, &path)?;

    // 사용자가 동의를 거부했거나 프로바이더 측 에러
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("{} OAuth 에러: {} - {}", provider, error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    query.validate()?;

    let profile = ctx.oauth.fetch_profile(provider, &query.code, &query.state).await?;
    let outcome = ctx.authenticator.authenticate(Credentials::Profile(profile)).await?;

    login_response(&ctx, outcome)
}

/// 세션 토큰의 사용자 조회
#[get("/me")]
pub async fn current_user(
    ctx: web::Data<AppContext>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let auth_header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("인증 헤더가 없습니다".to_string()))?;

    let token = ctx.tokens.extract_bearer_token(auth_header)?;
    let claims = ctx.tokens.verify(token)?;
    let user = ctx.users.find_by_id(&claims.sub).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
