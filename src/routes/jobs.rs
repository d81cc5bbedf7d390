/// Job routes: posting (recruiter/admin), public listing, and applications
/// (student).

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::{AppError, StoreError};
use crate::store::{Application, Job, JobFilter, JobType, Store, YearLevel};

#[derive(Deserialize)]
pub struct JobCreateRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub job_type: JobType,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub year_level: Option<YearLevel>,
    pub experience_level: Option<String>,
    pub salary: Option<String>,
}

#[derive(Deserialize)]
pub struct JobsQuery {
    pub job_type: Option<JobType>,
    pub year_level: Option<YearLevel>,
    pub experience_level: Option<String>,
}

/// POST /api/jobs — recruiters and admins only.
pub async fn create_job(
    claims: web::ReqData<Claims>,
    form: web::Json<JobCreateRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let posted_by = claims.user_id()?;
    let form = form.into_inner();

    let job = Job {
        id: Uuid::new_v4(),
        title: form.title,
        company: form.company,
        location: form.location,
        description: form.description,
        job_type: form.job_type,
        required_skills: form.required_skills,
        year_level: form.year_level,
        experience_level: form.experience_level,
        salary: form.salary,
        posted_by,
        created_at: Utc::now(),
    };
    let job_id = job.id;
    store.insert_job(job).await;

    tracing::info!(user_id = %posted_by, job_id = %job_id, "Job posted");
    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Job posted successfully",
        "job_id": job_id
    })))
}

/// GET /api/jobs — public, filterable, newest first.
pub async fn list_jobs(
    query: web::Query<JobsQuery>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let filter = JobFilter {
        job_type: query.job_type,
        year_level: query.year_level,
        experience_level: query.experience_level,
    };

    let jobs = store.list_jobs(&filter).await;
    Ok(HttpResponse::Ok().json(jobs))
}

/// POST /api/jobs/{job_id}/apply — students only.
///
/// # Errors
/// - 404: no such job
/// - 409: already applied
pub async fn apply_to_job(
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let student_id = claims.user_id()?;
    let job_id = path.into_inner();

    if store.find_job(job_id).await.is_none() {
        return Err(AppError::Store(StoreError::NotFound(
            "job not found".to_string(),
        )));
    }

    store
        .insert_application(Application::new(student_id, job_id))
        .await?;

    tracing::info!(user_id = %student_id, job_id = %job_id, "Application submitted");
    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Application submitted successfully"
    })))
}
