/// In-process document store.
///
/// The routing layer's storage collaborator: one lock-guarded collection per
/// document type, mirroring the collections of the original deployment's
/// document database. Uniqueness rules (one account per email, one profile
/// per user, one application per student+job) are enforced at insert.

mod models;

pub use models::{
    Application, Course, Job, JobType, RecruiterProfile, StudentProfile, User, YearLevel,
};

use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;

#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub job_type: Option<JobType>,
    pub year_level: Option<YearLevel>,
    pub experience_level: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StudentSearch {
    pub college: Option<String>,
    pub year_of_passout: Option<i32>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CollectionCounts {
    pub total_users: usize,
    pub total_students: usize,
    pub total_recruiters: usize,
    pub total_courses: usize,
    pub total_jobs: usize,
    pub total_applications: usize,
}

#[derive(Default)]
pub struct Store {
    users: RwLock<HashMap<Uuid, User>>,
    // Profiles are keyed by owning user id: at most one per user.
    students: RwLock<HashMap<Uuid, StudentProfile>>,
    recruiters: RwLock<HashMap<Uuid, RecruiterProfile>>,
    courses: RwLock<HashMap<Uuid, Course>>,
    jobs: RwLock<HashMap<Uuid, Job>>,
    applications: RwLock<HashMap<Uuid, Application>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // --- users ---

    pub async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate("email already registered".to_string()));
        }
        users.insert(user.id, user);
        Ok(())
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    pub async fn find_user(&self, id: Uuid) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    pub async fn list_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        users
    }

    /// Marks a user as verified; also flips the recruiter profile flag when
    /// the user has one.
    pub async fn mark_user_verified(&self, user_id: Uuid) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::NotFound("user not found".to_string()))?;
        user.is_verified = true;
        drop(users);

        if let Some(recruiter) = self.recruiters.write().await.get_mut(&user_id) {
            recruiter.is_verified = true;
        }
        Ok(())
    }

    // --- student profiles ---

    pub async fn insert_student_profile(
        &self,
        profile: StudentProfile,
    ) -> Result<(), StoreError> {
        let mut students = self.students.write().await;
        if students.contains_key(&profile.user_id) {
            return Err(StoreError::Duplicate(
                "student profile already exists".to_string(),
            ));
        }
        students.insert(profile.user_id, profile);
        Ok(())
    }

    pub async fn find_student_profile(&self, user_id: Uuid) -> Option<StudentProfile> {
        self.students.read().await.get(&user_id).cloned()
    }

    pub async fn list_student_profiles(&self) -> Vec<StudentProfile> {
        self.students.read().await.values().cloned().collect()
    }

    /// Adds a skill to a student's completed set (idempotence rejected: a
    /// skill already present is reported as a duplicate).
    pub async fn add_completed_skill(
        &self,
        user_id: Uuid,
        skill_name: &str,
    ) -> Result<(), StoreError> {
        let mut students = self.students.write().await;
        let profile = students
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::NotFound("student profile not found".to_string()))?;
        if profile.completed_skills.iter().any(|s| s == skill_name) {
            return Err(StoreError::Duplicate("skill already completed".to_string()));
        }
        profile.completed_skills.push(skill_name.to_string());
        Ok(())
    }

    pub async fn search_students(&self, search: &StudentSearch) -> Vec<StudentProfile> {
        let college = search.college.as_ref().map(|c| c.to_lowercase());
        self.students
            .read()
            .await
            .values()
            .filter(|p| {
                college
                    .as_ref()
                    .map_or(true, |c| p.college.to_lowercase().contains(c))
            })
            .filter(|p| {
                search
                    .year_of_passout
                    .map_or(true, |y| p.year_of_passout == y)
            })
            .filter(|p| {
                search.skills.as_ref().map_or(true, |wanted| {
                    wanted.iter().any(|s| p.completed_skills.contains(s))
                })
            })
            .cloned()
            .collect()
    }

    // --- recruiter profiles ---

    pub async fn insert_recruiter_profile(
        &self,
        profile: RecruiterProfile,
    ) -> Result<(), StoreError> {
        let mut recruiters = self.recruiters.write().await;
        if recruiters.contains_key(&profile.user_id) {
            return Err(StoreError::Duplicate(
                "recruiter profile already exists".to_string(),
            ));
        }
        recruiters.insert(profile.user_id, profile);
        Ok(())
    }

    pub async fn find_recruiter_profile(&self, user_id: Uuid) -> Option<RecruiterProfile> {
        self.recruiters.read().await.get(&user_id).cloned()
    }

    pub async fn list_recruiter_profiles(&self) -> Vec<RecruiterProfile> {
        self.recruiters.read().await.values().cloned().collect()
    }

    // --- courses ---

    pub async fn insert_course(&self, course: Course) {
        self.courses.write().await.insert(course.id, course);
    }

    pub async fn find_course_by_skill(&self, skill_name: &str) -> Option<Course> {
        self.courses
            .read()
            .await
            .values()
            .find(|c| c.skill_name == skill_name)
            .cloned()
    }

    pub async fn list_courses(&self) -> Vec<Course> {
        let mut courses: Vec<Course> = self.courses.read().await.values().cloned().collect();
        courses.sort_by_key(|c| c.created_at);
        courses
    }

    pub async fn update_course(
        &self,
        course_id: Uuid,
        apply: impl FnOnce(&mut Course),
    ) -> Result<(), StoreError> {
        let mut courses = self.courses.write().await;
        let course = courses
            .get_mut(&course_id)
            .ok_or_else(|| StoreError::NotFound("course not found".to_string()))?;
        apply(course);
        Ok(())
    }

    pub async fn delete_course(&self, course_id: Uuid) -> Result<(), StoreError> {
        self.courses
            .write()
            .await
            .remove(&course_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound("course not found".to_string()))
    }

    // --- jobs ---

    pub async fn insert_job(&self, job: Job) {
        self.jobs.write().await.insert(job.id, job);
    }

    pub async fn find_job(&self, job_id: Uuid) -> Option<Job> {
        self.jobs.read().await.get(&job_id).cloned()
    }

    /// Jobs matching the filter, newest first.
    pub async fn list_jobs(&self, filter: &JobFilter) -> Vec<Job> {
        let mut jobs: Vec<Job> = self
            .jobs
            .read()
            .await
            .values()
            .filter(|j| filter.job_type.map_or(true, |t| j.job_type == t))
            .filter(|j| filter.year_level.map_or(true, |y| j.year_level == Some(y)))
            .filter(|j| {
                filter
                    .experience_level
                    .as_ref()
                    .map_or(true, |e| j.experience_level.as_deref() == Some(e.as_str()))
            })
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        jobs
    }

    pub async fn count_jobs(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn delete_job(&self, job_id: Uuid) -> Result<(), StoreError> {
        self.jobs
            .write()
            .await
            .remove(&job_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound("job not found".to_string()))
    }

    // --- applications ---

    pub async fn insert_application(&self, application: Application) -> Result<(), StoreError> {
        let mut applications = self.applications.write().await;
        if applications
            .values()
            .any(|a| a.student_id == application.student_id && a.job_id == application.job_id)
        {
            return Err(StoreError::Duplicate(
                "already applied to this job".to_string(),
            ));
        }
        applications.insert(application.id, application);
        Ok(())
    }

    pub async fn applications_by_student(&self, student_id: Uuid) -> Vec<Application> {
        let mut apps: Vec<Application> = self
            .applications
            .read()
            .await
            .values()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect();
        apps.sort_by_key(|a| a.applied_at);
        apps
    }

    // --- analytics ---

    pub async fn collection_counts(&self) -> CollectionCounts {
        CollectionCounts {
            total_users: self.users.read().await.len(),
            total_students: self.students.read().await.len(),
            total_recruiters: self.recruiters.read().await.len(),
            total_courses: self.courses.read().await.len(),
            total_jobs: self.jobs.read().await.len(),
            total_applications: self.applications.read().await.len(),
        }
    }
}
