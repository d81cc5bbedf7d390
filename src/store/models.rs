/// Stored document shapes, one struct per collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Role;

/// User account. Owns the credential hash; the role is assigned once at
/// registration and never changes here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub is_verified: bool,
}

impl User {
    pub fn new(email: String, password_hash: String, role: Role, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            role,
            name,
            created_at: Utc::now(),
            is_verified: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub college: String,
    pub branch: String,
    pub year_of_passout: i32,
    pub completed_skills: Vec<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruiterProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub position: String,
    pub phone: Option<String>,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub skill_name: String,
    pub created_at: DateTime<Utc>,
}

impl Course {
    pub fn new(title: String, description: String, skill_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            price: 500.0,
            duration: "2-3 hours".to_string(),
            skill_name,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Internship,
    Fulltime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearLevel {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "final")]
    Final,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub job_type: JobType,
    pub required_skills: Vec<String>,
    /// For internships
    pub year_level: Option<YearLevel>,
    /// fresher/experienced, for full-time roles
    pub experience_level: Option<String>,
    pub salary: Option<String>,
    /// User id of the posting recruiter/admin
    pub posted_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub student_id: Uuid,
    pub job_id: Uuid,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

impl Application {
    pub fn new(student_id: Uuid, job_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            job_id,
            status: "applied".to_string(),
            applied_at: Utc::now(),
        }
    }
}
