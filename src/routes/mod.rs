mod admin;
mod auth;
mod courses;
mod health_check;
mod jobs;
mod recruiters;
mod students;

pub use admin::{
    add_course, delete_course, delete_job, get_analytics, init_data, list_all_users,
    update_course, verify_user,
};
pub use auth::{login, register};
pub use courses::list_courses;
pub use health_check::health_check;
pub use jobs::{apply_to_job, create_job, list_jobs};
pub use recruiters::{create_recruiter_profile, get_recruiter_profile, search_students};
pub use students::{
    create_student_profile, get_student_profile, complete_skill, my_applications,
};

use actix_web::Responder;

/// GET /api/ — service banner.
pub async fn root() -> impl Responder {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "message": "JobLens API - Connecting talent with opportunity"
    }))
}
