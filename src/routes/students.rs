/// Student routes: profile management, skill completion, applications.
/// All behind the student-only guard.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::{AppError, StoreError};
use crate::store::{Store, StudentProfile};

#[derive(Deserialize)]
pub struct StudentProfileRequest {
    pub college: String,
    pub branch: String,
    pub year_of_passout: i32,
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct StudentProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub college: String,
    pub branch: String,
    pub year_of_passout: i32,
    pub completed_skills: Vec<String>,
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct ApplicationSummary {
    pub application_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub status: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}

/// POST /api/students/profile
pub async fn create_student_profile(
    claims: web::ReqData<Claims>,
    form: web::Json<StudentProfileRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id()?;
    let form = form.into_inner();

    let profile = StudentProfile {
        id: Uuid::new_v4(),
        user_id,
        college: form.college,
        branch: form.branch,
        year_of_passout: form.year_of_passout,
        completed_skills: Vec::new(),
        phone: form.phone,
    };
    store.insert_student_profile(profile).await?;

    tracing::info!(user_id = %user_id, "Student profile created");
    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Student profile created successfully"
    })))
}

/// GET /api/students/profile
pub async fn get_student_profile(
    claims: web::ReqData<Claims>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id()?;

    let profile = store
        .find_student_profile(user_id)
        .await
        .ok_or_else(|| {
            AppError::Store(StoreError::NotFound("student profile not found".to_string()))
        })?;
    let user = store
        .find_user(user_id)
        .await
        .ok_or_else(|| AppError::Internal("account missing for valid token".to_string()))?;

    Ok(HttpResponse::Ok().json(StudentProfileResponse {
        id: profile.id,
        name: user.name,
        email: user.email,
        college: profile.college,
        branch: profile.branch,
        year_of_passout: profile.year_of_passout,
        completed_skills: profile.completed_skills,
        phone: profile.phone,
    }))
}

/// POST /api/students/complete-skill/{skill_name}
pub async fn complete_skill(
    claims: web::ReqData<Claims>,
    path: web::Path<String>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id()?;
    let skill_name = path.into_inner();

    store.add_completed_skill(user_id, &skill_name).await?;

    tracing::info!(user_id = %user_id, skill = %skill_name, "Skill completed");
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Skill '{}' completed successfully", skill_name)
    })))
}

/// GET /api/students/applications
///
/// The student's applications joined with the jobs they target. Applications
/// whose job has since been deleted are skipped.
pub async fn my_applications(
    claims: web::ReqData<Claims>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id()?;

    let applications = store.applications_by_student(user_id).await;
    let mut result = Vec::with_capacity(applications.len());
    for application in applications {
        if let Some(job) = store.find_job(application.job_id).await {
            result.push(ApplicationSummary {
                application_id: application.id,
                job_title: job.title,
                company: job.company,
                location: job.location,
                status: application.status,
                applied_at: application.applied_at,
            });
        }
    }

    Ok(HttpResponse::Ok().json(result))
}
