//! 태그 목록 핸들러

use actix_web::{get, web, HttpResponse};
use crate::{core::AppContext, domain::dto::articles::TagPageQuery, errors::AppError};

/// `GET /tags/{tag}?page=N`
#[get("/tags/{tag}")]
pub async fn list_by_tag(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    query: web::Query<TagPageQuery>,
) -> Result<HttpResponse, AppError> {
    let view = ctx.tags.list(&path, query.page.as_deref()).await?;

    Ok(HttpResponse::Ok().json(view))
}
