//! End-to-end authentication and authorization flows: registration, login,
//! token rejection (missing/tampered/expired), and the 401-vs-403 boundary.

use std::net::TcpListener;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{json, Value};

use joblens::auth::{Claims, Role};
use joblens::configuration::JwtSettings;
use joblens::startup::run;
use joblens::store::Store;

const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

fn test_jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: TEST_SECRET.to_string(),
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

async fn register_user(
    client: &reqwest::Client,
    address: &str,
    email: &str,
    role: &str,
) -> Value {
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
    response.json().await.expect("Failed to parse response")
}

// --- Registration ---

#[tokio::test]
async fn register_returns_token_with_role_and_subject() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let body = register_user(&client, &address, "student@example.com", "student").await;

    assert!(body["access_token"].as_str().unwrap().contains('.'));
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user_role"], "student");
    assert!(body["user_id"].as_str().is_some());
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register_user(&client, &address, "dup@example.com", "student").await;

    let response = client
        .post(&format!("{}/api/auth/register", address))
        .json(&json!({
            "email": "dup@example.com",
            "password": "SecurePass123",
            "name": "Other User",
            "role": "recruiter"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(409, response.status().as_u16());
}

#[tokio::test]
async fn register_rejects_invalid_inputs() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let cases = vec![
        json!({"email": "notanemail", "password": "SecurePass123", "name": "A", "role": "student"}),
        json!({"email": "ok@example.com", "password": "weak", "name": "A", "role": "student"}),
        json!({"email": "ok@example.com", "password": "nouppercase1", "name": "A", "role": "student"}),
        json!({"email": "ok@example.com", "password": "SecurePass123", "name": "   ", "role": "student"}),
    ];

    for body in cases {
        let response = client
            .post(&format!("{}/api/auth/register", address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(400, response.status().as_u16(), "accepted: {}", body);
    }
}

// --- Login ---

#[tokio::test]
async fn login_returns_fresh_token() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register_user(&client, &address, "login@example.com", "recruiter").await;

    let response = client
        .post(&format!("{}/api/auth/login", address))
        .json(&json!({"email": "login@example.com", "password": "SecurePass123"}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["user_role"], "recruiter");
    assert!(body["access_token"].as_str().is_some());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register_user(&client, &address, "known@example.com", "student").await;

    let wrong_password = client
        .post(&format!("{}/api/auth/login", address))
        .json(&json!({"email": "known@example.com", "password": "WrongPass123"}))
        .send()
        .await
        .expect("Failed to execute request.");
    let unknown_email = client
        .post(&format!("{}/api/auth/login", address))
        .json(&json!({"email": "unknown@example.com", "password": "SecurePass123"}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(401, wrong_password.status().as_u16());
    assert_eq!(401, unknown_email.status().as_u16());

    let a: Value = wrong_password.json().await.unwrap();
    let b: Value = unknown_email.json().await.unwrap();
    assert_eq!(a["code"], b["code"]);
    assert_eq!(a["message"], b["message"]);
}

// --- 401 vs 403 boundary ---

#[tokio::test]
async fn student_token_passes_student_routes_but_not_admin_routes() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let body = register_user(&client, &address, "s@example.com", "student").await;
    let token = body["access_token"].as_str().unwrap();

    let student_route = client
        .get(&format!("{}/api/students/applications", address))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, student_route.status().as_u16());

    let admin_route = client
        .get(&format!("{}/api/admin/analytics", address))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(403, admin_route.status().as_u16());
}

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/students/applications", address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn non_bearer_authorization_header_is_unauthorized() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/students/applications", address))
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn tampered_token_is_unauthorized() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let body = register_user(&client, &address, "t@example.com", "student").await;
    let token = format!("{}x", body["access_token"].as_str().unwrap());

    let response = client
        .get(&format!("{}/api/students/applications", address))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // A correctly signed token whose lifetime has already elapsed.
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    let claims = Claims {
        sub: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_string(),
        role: Role::Student,
        iat: now - 86400,
        exp: now - 1,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode token");

    let response = client
        .get(&format!("{}/api/students/applications", address))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(401, response.status().as_u16());
}
