//! User Management HTTP Handlers

use actix_web::{post, web, HttpResponse};
use crate::{
    core::AppContext,
    domain::dto::users::request::CreateUserRequest,
    domain::dto::users::response::{CreateUserResponse, UserResponse},
    errors::AppError,
};

/// 로컬 회원가입 (`POST /api/v1/users`)
///
/// 성공 시 201과 생성된 사용자를 돌려줍니다. 이메일이 이미 쓰이고 있으면 409입니다.
#[post("")]
pub async fn create_user(
    ctx: web::Data<AppContext>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = ctx.users.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreateUserResponse {
        user: UserResponse::from(user),
        message: "사용자가 생성되었습니다".to_string(),
    }))
}
