use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::store::Store;

/// GET /api/courses — public course catalog.
pub async fn list_courses(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let courses = store.list_courses().await;
    Ok(HttpResponse::Ok().json(courses))
}
