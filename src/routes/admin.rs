/// Admin routes: seed data, course management, job/user administration, and
/// analytics. All behind the admin-only guard.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::AppError;
use crate::store::{Course, Job, JobType, Store, User, YearLevel};

#[derive(Deserialize)]
pub struct CourseCreateRequest {
    pub title: String,
    pub description: String,
    pub skill_name: String,
    pub price: Option<f64>,
    pub duration: Option<String>,
}

#[derive(Deserialize)]
pub struct CourseUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub skill_name: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
}

#[derive(Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: chrono::DateTime<Utc>,
    pub is_verified: bool,
}

/// POST /api/admin/init-data
///
/// Seeds the default course catalog (skipping skills that already have a
/// course) and, when no jobs exist yet, a couple of sample postings.
pub async fn init_data(
    claims: web::ReqData<Claims>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let admin_id = claims.user_id()?;

    let default_courses = [
        ("Resume Building", "Learn to create professional resumes that get noticed", "Resume Building"),
        ("Aptitude Prep", "Master quantitative and logical reasoning skills", "Aptitude"),
        ("Python Basics", "Learn Python programming from scratch", "Python"),
        ("SQL Basics", "Master database querying with SQL", "SQL"),
        ("Communication Skills", "Enhance your professional communication abilities", "Communication"),
    ];
    for (title, description, skill_name) in default_courses {
        if store.find_course_by_skill(skill_name).await.is_none() {
            store
                .insert_course(Course::new(
                    title.to_string(),
                    description.to_string(),
                    skill_name.to_string(),
                ))
                .await;
        }
    }

    if store.count_jobs().await == 0 {
        let default_jobs = [
            Job {
                id: Uuid::new_v4(),
                title: "Frontend Developer Intern".to_string(),
                company: "TechCorp Inc".to_string(),
                location: "Bangalore, India".to_string(),
                description: "Build responsive web applications using React and modern frontend technologies".to_string(),
                job_type: JobType::Internship,
                required_skills: vec!["Python".to_string(), "SQL".to_string(), "Communication".to_string()],
                year_level: Some(YearLevel::Third),
                experience_level: None,
                salary: Some("₹15,000/month".to_string()),
                posted_by: admin_id,
                created_at: Utc::now(),
            },
            Job {
                id: Uuid::new_v4(),
                title: "Software Engineer".to_string(),
                company: "StartupXYZ".to_string(),
                location: "Mumbai, India".to_string(),
                description: "Full-stack development role working on cutting-edge products".to_string(),
                job_type: JobType::Fulltime,
                required_skills: vec!["Python".to_string(), "SQL".to_string()],
                year_level: None,
                experience_level: Some("fresher".to_string()),
                salary: Some("₹6-8 LPA".to_string()),
                posted_by: admin_id,
                created_at: Utc::now(),
            },
        ];
        for job in default_jobs {
            store.insert_job(job).await;
        }
    }

    tracing::info!(user_id = %admin_id, "Default data initialized");
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Default data initialized successfully"
    })))
}

/// POST /api/admin/courses
pub async fn add_course(
    form: web::Json<CourseCreateRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let mut course = Course::new(form.title, form.description, form.skill_name);
    if let Some(price) = form.price {
        course.price = price;
    }
    if let Some(duration) = form.duration {
        course.duration = duration;
    }
    let course_id = course.id;
    store.insert_course(course).await;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Course added successfully",
        "course_id": course_id
    })))
}

/// PUT /api/admin/courses/{course_id}
pub async fn update_course(
    path: web::Path<Uuid>,
    form: web::Json<CourseUpdateRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let course_id = path.into_inner();
    let form = form.into_inner();

    store
        .update_course(course_id, |course| {
            if let Some(title) = form.title {
                course.title = title;
            }
            if let Some(description) = form.description {
                course.description = description;
            }
            if let Some(skill_name) = form.skill_name {
                course.skill_name = skill_name;
            }
            if let Some(price) = form.price {
                course.price = price;
            }
            if let Some(duration) = form.duration {
                course.duration = duration;
            }
        })
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Course updated successfully"
    })))
}

/// DELETE /api/admin/courses/{course_id}
pub async fn delete_course(
    path: web::Path<Uuid>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.delete_course(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Course deleted successfully"
    })))
}

/// DELETE /api/admin/jobs/{job_id}
pub async fn delete_job(
    path: web::Path<Uuid>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.delete_job(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Job deleted successfully"
    })))
}

/// GET /api/admin/users
///
/// Accounts plus their role profiles, for the admin dashboard.
pub async fn list_all_users(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let users = store.list_users().await;
    let students = store.list_student_profiles().await;
    let recruiters = store.list_recruiter_profiles().await;

    let user_summaries: Vec<UserSummary> = users.iter().map(summarize_user).collect();

    let mut student_entries = Vec::with_capacity(students.len());
    for profile in students {
        if let Some(user) = users.iter().find(|u| u.id == profile.user_id) {
            student_entries.push(serde_json::json!({
                "id": profile.id,
                "name": user.name,
                "email": user.email,
                "college": profile.college,
                "branch": profile.branch,
                "year_of_passout": profile.year_of_passout,
                "completed_skills": profile.completed_skills,
                "skill_count": profile.completed_skills.len(),
            }));
        }
    }

    let mut recruiter_entries = Vec::with_capacity(recruiters.len());
    for profile in recruiters {
        if let Some(user) = users.iter().find(|u| u.id == profile.user_id) {
            recruiter_entries.push(serde_json::json!({
                "id": profile.id,
                "name": user.name,
                "email": user.email,
                "company": profile.company,
                "position": profile.position,
                "is_verified": profile.is_verified,
            }));
        }
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "users": user_summaries,
        "students": student_entries,
        "recruiters": recruiter_entries,
    })))
}

/// PUT /api/admin/users/{user_id}/verify
pub async fn verify_user(
    path: web::Path<Uuid>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    store.mark_user_verified(user_id).await?;

    tracing::info!(user_id = %user_id, "User verified");
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "User verified successfully"
    })))
}

/// GET /api/admin/analytics — collection counts.
pub async fn get_analytics(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let stats = store.collection_counts().await;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "stats": stats })))
}

fn summarize_user(user: &User) -> UserSummary {
    UserSummary {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.to_string(),
        created_at: user.created_at,
        is_verified: user.is_verified,
    }
}
