/// Recruiter routes: profile management and student search.
/// All behind the recruiter-only guard.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::{AppError, StoreError};
use crate::store::{RecruiterProfile, Store, StudentSearch};

#[derive(Deserialize)]
pub struct RecruiterProfileRequest {
    pub company: String,
    pub position: String,
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct RecruiterProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub phone: Option<String>,
    pub is_verified: bool,
}

#[derive(Deserialize)]
pub struct StudentSearchRequest {
    pub college: Option<String>,
    pub year_of_passout: Option<i32>,
    pub skills: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct StudentSearchResult {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub college: String,
    pub branch: String,
    pub year_of_passout: i32,
    pub completed_skills: Vec<String>,
    pub skill_count: usize,
}

/// POST /api/recruiters/profile
pub async fn create_recruiter_profile(
    claims: web::ReqData<Claims>,
    form: web::Json<RecruiterProfileRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id()?;
    let form = form.into_inner();

    let profile = RecruiterProfile {
        id: Uuid::new_v4(),
        user_id,
        company: form.company,
        position: form.position,
        phone: form.phone,
        is_verified: false,
    };
    store.insert_recruiter_profile(profile).await?;

    tracing::info!(user_id = %user_id, "Recruiter profile created");
    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Recruiter profile created successfully"
    })))
}

/// GET /api/recruiters/profile
pub async fn get_recruiter_profile(
    claims: web::ReqData<Claims>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id()?;

    let profile = store
        .find_recruiter_profile(user_id)
        .await
        .ok_or_else(|| {
            AppError::Store(StoreError::NotFound("recruiter profile not found".to_string()))
        })?;
    let user = store
        .find_user(user_id)
        .await
        .ok_or_else(|| AppError::Internal("account missing for valid token".to_string()))?;

    Ok(HttpResponse::Ok().json(RecruiterProfileResponse {
        id: profile.id,
        name: user.name,
        email: user.email,
        company: profile.company,
        position: profile.position,
        phone: profile.phone,
        is_verified: profile.is_verified,
    }))
}

/// POST /api/recruiters/search-students
///
/// Filters by college substring (case-insensitive), passout year, and
/// completed skills; results are ranked by completed-skill count, most
/// skilled first.
pub async fn search_students(
    form: web::Json<StudentSearchRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let search = StudentSearch {
        college: form.college,
        year_of_passout: form.year_of_passout,
        skills: form.skills,
    };

    let profiles = store.search_students(&search).await;
    let mut result = Vec::with_capacity(profiles.len());
    for profile in profiles {
        if let Some(user) = store.find_user(profile.user_id).await {
            result.push(StudentSearchResult {
                id: profile.id,
                name: user.name,
                email: user.email,
                college: profile.college,
                branch: profile.branch,
                year_of_passout: profile.year_of_passout,
                skill_count: profile.completed_skills.len(),
                completed_skills: profile.completed_skills,
            });
        }
    }
    result.sort_by(|a, b| b.skill_count.cmp(&a.skill_count));

    Ok(HttpResponse::Ok().json(result))
}
