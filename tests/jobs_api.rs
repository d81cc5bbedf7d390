//! Job-board flows over the HTTP surface: profiles, job posting and
//! applications, course catalog, and admin management.

use std::net::TcpListener;

use serde_json::{json, Value};

use joblens::configuration::JwtSettings;
use joblens::startup::run;
use joblens::store::Store;

fn test_jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        token_ttl_seconds: 86400,
    }
}

async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let server =
        run(listener, Store::new(), test_jwt_settings()).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    format!("http://127.0.0.1:{}", port)
}

async fn register_and_get_token(
    client: &reqwest::Client,
    address: &str,
    email: &str,
    role: &str,
) -> String {
    let response = client
        .post(&format!("{}/api/auth/register", address))
        .json(&json!({
            "email": email,
            "password": "SecurePass123",
            "name": "Test User",
            "role": role
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, response.status().as_u16());

    let body: Value = response.json().await.expect("Failed to parse response");
    body["access_token"].as_str().unwrap().to_string()
}

fn sample_job() -> Value {
    json!({
        "title": "Backend Intern",
        "company": "Acme Corp",
        "location": "Remote",
        "description": "Work on the backend",
        "job_type": "internship",
        "required_skills": ["Python"],
        "year_level": "3rd",
        "salary": "stipend"
    })
}

#[tokio::test]
async fn recruiter_posts_job_and_student_applies_once() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let recruiter = register_and_get_token(&client, &address, "r@example.com", "recruiter").await;
    let student = register_and_get_token(&client, &address, "s@example.com", "student").await;

    let posted = client
        .post(&format!("{}/api/jobs", address))
        .bearer_auth(&recruiter)
        .json(&sample_job())
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, posted.status().as_u16());
    let posted: Value = posted.json().await.unwrap();
    let job_id = posted["job_id"].as_str().unwrap().to_string();

    // Listing is public
    let jobs = client
        .get(&format!("{}/api/jobs", address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, jobs.status().as_u16());
    let jobs: Value = jobs.json().await.unwrap();
    assert_eq!(1, jobs.as_array().unwrap().len());

    let apply = client
        .post(&format!("{}/api/jobs/{}/apply", address, job_id))
        .bearer_auth(&student)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, apply.status().as_u16());

    let again = client
        .post(&format!("{}/api/jobs/{}/apply", address, job_id))
        .bearer_auth(&student)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(409, again.status().as_u16());

    let applications = client
        .get(&format!("{}/api/students/applications", address))
        .bearer_auth(&student)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, applications.status().as_u16());
    let applications: Value = applications.json().await.unwrap();
    let entries = applications.as_array().unwrap();
    assert_eq!(1, entries.len());
    assert_eq!(entries[0]["job_title"], "Backend Intern");
    assert_eq!(entries[0]["status"], "applied");
}

#[tokio::test]
async fn student_cannot_post_jobs() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let student = register_and_get_token(&client, &address, "s2@example.com", "student").await;

    let response = client
        .post(&format!("{}/api/jobs", address))
        .bearer_auth(&student)
        .json(&sample_job())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(403, response.status().as_u16());
}

#[tokio::test]
async fn applying_to_unknown_job_is_not_found() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let student = register_and_get_token(&client, &address, "s3@example.com", "student").await;

    let response = client
        .post(&format!(
            "{}/api/jobs/3fa85f64-5717-4562-b3fc-2c963f66afa6/apply",
            address
        ))
        .bearer_auth(&student)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn job_listing_supports_filters() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let recruiter = register_and_get_token(&client, &address, "r2@example.com", "recruiter").await;
    for job in [
        sample_job(),
        json!({
            "title": "Engineer",
            "company": "Acme Corp",
            "location": "Mumbai",
            "description": "Full-time role",
            "job_type": "fulltime",
            "experience_level": "fresher"
        }),
    ] {
        let response = client
            .post(&format!("{}/api/jobs", address))
            .bearer_auth(&recruiter)
            .json(&job)
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(201, response.status().as_u16());
    }

    let interns: Value = client
        .get(&format!("{}/api/jobs?job_type=internship", address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(1, interns.as_array().unwrap().len());
    assert_eq!(interns[0]["title"], "Backend Intern");

    let freshers: Value = client
        .get(&format!(
            "{}/api/jobs?job_type=fulltime&experience_level=fresher",
            address
        ))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(1, freshers.as_array().unwrap().len());
    assert_eq!(freshers[0]["title"], "Engineer");
}

#[tokio::test]
async fn student_profile_lifecycle_and_recruiter_search() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let student = register_and_get_token(&client, &address, "s4@example.com", "student").await;
    let recruiter = register_and_get_token(&client, &address, "r3@example.com", "recruiter").await;

    let created = client
        .post(&format!("{}/api/students/profile", address))
        .bearer_auth(&student)
        .json(&json!({
            "college": "IIT Delhi",
            "branch": "CSE",
            "year_of_passout": 2026
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, created.status().as_u16());

    // One profile per user
    let duplicate = client
        .post(&format!("{}/api/students/profile", address))
        .bearer_auth(&student)
        .json(&json!({
            "college": "Elsewhere",
            "branch": "ECE",
            "year_of_passout": 2027
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(409, duplicate.status().as_u16());

    let skill = client
        .post(&format!("{}/api/students/complete-skill/Python", address))
        .bearer_auth(&student)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, skill.status().as_u16());

    let profile: Value = client
        .get(&format!("{}/api/students/profile", address))
        .bearer_auth(&student)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(profile["college"], "IIT Delhi");
    assert_eq!(profile["completed_skills"][0], "Python");

    let results: Value = client
        .post(&format!("{}/api/recruiters/search-students", address))
        .bearer_auth(&recruiter)
        .json(&json!({"college": "iit", "skills": ["Python"]}))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(1, results.len());
    assert_eq!(results[0]["skill_count"], 1);
    assert_eq!(results[0]["email"], "s4@example.com");
}

#[tokio::test]
async fn admin_manages_courses_jobs_and_users() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let admin = register_and_get_token(&client, &address, "a@example.com", "admin").await;
    let recruiter = register_and_get_token(&client, &address, "r4@example.com", "recruiter").await;

    // Seed defaults
    let seeded = client
        .post(&format!("{}/api/admin/init-data", address))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, seeded.status().as_u16());

    let courses: Value = client
        .get(&format!("{}/api/courses", address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(5, courses.as_array().unwrap().len());

    // Seeding again adds nothing
    client
        .post(&format!("{}/api/admin/init-data", address))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to execute request.");
    let courses: Value = client
        .get(&format!("{}/api/courses", address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(5, courses.as_array().unwrap().len());

    // Course CRUD
    let added: Value = client
        .post(&format!("{}/api/admin/courses", address))
        .bearer_auth(&admin)
        .json(&json!({
            "title": "Rust Basics",
            "description": "Ownership and borrowing",
            "skill_name": "Rust"
        }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    let course_id = added["course_id"].as_str().unwrap().to_string();

    let updated = client
        .put(&format!("{}/api/admin/courses/{}", address, course_id))
        .bearer_auth(&admin)
        .json(&json!({"price": 750.0}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, updated.status().as_u16());

    let deleted = client
        .delete(&format!("{}/api/admin/courses/{}", address, course_id))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, deleted.status().as_u16());

    let gone = client
        .delete(&format!("{}/api/admin/courses/{}", address, course_id))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, gone.status().as_u16());

    // User administration
    let users: Value = client
        .get(&format!("{}/api/admin/users", address))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    let listed = users["users"].as_array().unwrap();
    assert_eq!(2, listed.len());
    let recruiter_id = listed
        .iter()
        .find(|u| u["role"] == "recruiter")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let verified = client
        .put(&format!("{}/api/admin/users/{}/verify", address, recruiter_id))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, verified.status().as_u16());

    // Analytics reflect the collections
    let analytics: Value = client
        .get(&format!("{}/api/admin/analytics", address))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(2, analytics["stats"]["total_users"]);
    assert_eq!(5, analytics["stats"]["total_courses"]);
    assert_eq!(2, analytics["stats"]["total_jobs"]);

    // Recruiters cannot touch admin routes
    let forbidden = client
        .get(&format!("{}/api/admin/analytics", address))
        .bearer_auth(&recruiter)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(403, forbidden.status().as_u16());
}
