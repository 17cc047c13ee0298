// Integration tests for Skill Match

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use skill_match::core::ResumeExtractor;
use skill_match::routes::{self, AppState};
use skill_match::services::ExtractionCache;

const RESUME: &str = "
JANE ROE
jane.roe@example.com | +1 (555) 123-4567

Backend engineer with 6+ years of experience in distributed systems.
Skilled in Rust, Go, and PostgreSQL. Also working with k8s and Terraform.

EDUCATION
Master of Science in Computer Science

SKILLS
Docker, Kafka, Redis, REST API, gRPC, GraphQL
";

fn app_state(max_text_bytes: usize) -> AppState {
    AppState {
        extractor: ResumeExtractor::with_builtin_vocabulary(),
        cache: ExtractionCache::new(100, 60),
        max_text_bytes,
    }
}

macro_rules! init_app {
    ($max_text_bytes:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state($max_text_bytes)))
                .app_data(routes::json_config($max_text_bytes))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[::core::prelude::v1::test]
fn test_integration_end_to_end_extraction() {
    let extractor = ResumeExtractor::with_builtin_vocabulary();
    let result = extractor.extract(RESUME);

    assert_eq!(
        result.skills,
        vec![
            "Docker",
            "Go",
            "GraphQL",
            "Kubernetes",
            "PostgreSQL",
            "REST API",
            "Redis",
            "Rust",
            "Terraform",
        ]
    );
    assert_eq!(result.email.as_deref(), Some("jane.roe@example.com"));
    assert_eq!(result.phone.as_deref(), Some("+1 (555) 123-4567"));
    assert_eq!(result.education.as_deref(), Some("Master of Science"));
    assert_eq!(result.experience_years, 6);

    // 9 skills and a few hundred characters
    let expected = 5.0 + 45.0 + result.text_length as f64 / 100.0;
    assert!((result.confidence - expected).abs() < 1e-9);
}

#[::core::prelude::v1::test]
fn test_integration_extract_then_match() {
    let extractor = ResumeExtractor::with_builtin_vocabulary();
    let skills = extractor.extract_skills(RESUME);

    let record = skill_match::compute_match(&["rust", "Kubernetes", "Java", "AWS"], &skills);

    assert_eq!(record.match_score, 50.0);
    assert_eq!(record.matching_skills, vec!["rust", "Kubernetes"]);
    assert_eq!(record.missing_skills, vec!["Java", "AWS"]);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = init_app!(1024);

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_skills_endpoint_lists_vocabulary() {
    let app = init_app!(1024);

    let req = test::TestRequest::get().uri("/api/v1/skills").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let skills = body["skills"].as_array().unwrap();
    assert_eq!(skills[0], "Python");
    assert!(skills.contains(&json!("Node.js")));
    assert_eq!(body["aliases"]["Kubernetes"], json!(["k8s"]));
    assert!(body["aliases"].get("Rust").is_none());
}

#[actix_web::test]
async fn test_extract_endpoint() {
    let app = init_app!(64 * 1024);

    let req = test::TestRequest::post()
        .uri("/api/v1/extract")
        .set_json(json!({ "text": RESUME }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["email"], "jane.roe@example.com");
    assert_eq!(body["experienceYears"], 6);
    assert_eq!(body["textLength"], RESUME.chars().count());
    assert_eq!(body["cached"], false);
    assert!(body["skills"].as_array().unwrap().contains(&json!("Rust")));
    assert!(body["extractionId"].is_string());

    // Same text again is served from the cache
    let req = test::TestRequest::post()
        .uri("/api/v1/extract")
        .set_json(json!({ "text": RESUME }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["cached"], true);
    assert_eq!(body["email"], "jane.roe@example.com");
}

#[actix_web::test]
async fn test_extract_empty_text() {
    let app = init_app!(1024);

    let req = test::TestRequest::post()
        .uri("/api/v1/extract")
        .set_json(json!({ "text": "" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["skills"], json!([]));
    assert_eq!(body["email"], Value::Null);
    assert_eq!(body["confidence"], 5.0);
}

#[actix_web::test]
async fn test_extract_skills_endpoint() {
    let app = init_app!(1024);

    let req = test::TestRequest::post()
        .uri("/api/v1/extract/skills")
        .set_json(json!({ "text": "I use js daily with nodejs and Node.js" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["skills"], json!(["JavaScript", "Node.js"]));
}

#[actix_web::test]
async fn test_extract_rejects_oversized_text() {
    let app = init_app!(16);

    let req = test::TestRequest::post()
        .uri("/api/v1/extract")
        .set_json(json!({ "text": "x".repeat(17) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "payload_too_large");
    assert_eq!(body["statusCode"], 413);
}

#[actix_web::test]
async fn test_extract_rejects_malformed_json() {
    let app = init_app!(1024);

    let req = test::TestRequest::post()
        .uri("/api/v1/extract")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"text\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_match_endpoint() {
    let app = init_app!(1024);

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({
            "requiredSkills": ["Python", "Flask", "MongoDB", "React"],
            "candidateSkills": ["python", "Flask", "JavaScript"]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["matchScore"], 50.0);
    assert_eq!(body["matchingSkills"], json!(["Python", "Flask"]));
    assert_eq!(body["missingSkills"], json!(["MongoDB", "React"]));
}

#[actix_web::test]
async fn test_match_endpoint_without_required_skills() {
    let app = init_app!(1024);

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({ "candidate_skills": ["Rust"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["matchScore"], 0.0);
    assert_eq!(body["matchingSkills"], json!([]));
    assert_eq!(body["missingSkills"], json!([]));
}

#[actix_web::test]
async fn test_rank_endpoint() {
    let app = init_app!(1024);

    let req = test::TestRequest::post()
        .uri("/api/v1/match/rank")
        .set_json(json!({
            "requiredSkills": ["Rust", "Go"],
            "candidates": [
                { "candidateId": "c", "skills": ["Rust"] },
                { "candidateId": "a", "skills": ["rust", "go"] },
                { "candidateId": "b", "skills": ["Go"] },
                { "candidateId": "d", "skills": [] }
            ],
            "limit": 3
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalCandidates"], 4);
    let rankings = body["rankings"].as_array().unwrap();
    assert_eq!(rankings.len(), 3);
    assert_eq!(rankings[0]["candidateId"], "a");
    assert_eq!(rankings[0]["matchScore"], 100.0);
    assert_eq!(rankings[1]["candidateId"], "b");
    assert_eq!(rankings[2]["candidateId"], "c");
    assert_eq!(rankings[2]["missingSkills"], json!(["Go"]));
}

#[actix_web::test]
async fn test_rank_endpoint_requires_skills() {
    let app = init_app!(1024);

    let req = test::TestRequest::post()
        .uri("/api/v1/match/rank")
        .set_json(json!({
            "requiredSkills": [],
            "candidates": [{ "candidateId": "a", "skills": ["Rust"] }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
