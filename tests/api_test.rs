use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use job_board_backend::{database::MemoryStore, routes, AppState};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

const ADMIN_PASSWORD: &str = "test_admin_password";

fn setup_app() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()), ADMIN_PASSWORD);
    routes::api_router(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    password: Option<&str>,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(password) = password {
        builder = builder.header("x-admin-password", password);
    }
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn admin(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    send(app, method, uri, Some(ADMIN_PASSWORD), body).await
}

async fn create_job(app: &Router, body: JsonValue) -> i64 {
    let (status, job) = admin(app, "POST", "/api/jobs", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{job}");
    job["id"].as_i64().unwrap()
}

fn engineer() -> JsonValue {
    json!({
        "title": "Engineer",
        "company": "Acme",
        "location": "Remote",
        "description": "Build things"
    })
}

fn applicant(email: &str) -> JsonValue {
    json!({
        "name": "Ada Lovelace",
        "email": email,
        "phone": "555-0100",
        "resume_url": "https://example.com/ada.pdf",
        "experience": 4,
        "skills": "rust, sql"
    })
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = setup_app();
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn created_job_round_trips_with_defaults() {
    let app = setup_app();
    let (status, created) = admin(&app, "POST", "/api/jobs", Some(engineer())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].is_i64());
    assert!(created["posted_date"].is_string());
    assert_eq!(created["is_active"], true);
    assert_eq!(created["job_type"], "Full-time");
    assert_eq!(created["salary"], "Negotiable");
    assert_eq!(created["category"], "IT");
    assert_eq!(created["application_count"], 0);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/api/jobs/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["title"], "Engineer");
    assert_eq!(fetched["company"], "Acme");
    assert_eq!(fetched["location"], "Remote");
    assert_eq!(fetched["description"], "Build things");
}

#[tokio::test]
async fn unknown_job_is_not_found() {
    let app = setup_app();
    let (status, body) = send(&app, "GET", "/api/jobs/4242", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_job_requires_core_fields() {
    let app = setup_app();
    let (status, body) = admin(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({ "title": "Engineer", "company": "Acme", "location": "Remote" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("description"));

    let (_, all) = admin(&app, "GET", "/api/jobs/all", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn active_listing_hides_inactive_jobs() {
    let app = setup_app();
    let open = create_job(&app, engineer()).await;
    let mut closed_body = engineer();
    closed_body["title"] = json!("Closed role");
    closed_body["is_active"] = json!(false);
    let closed = create_job(&app, closed_body).await;

    let (status, active) = send(&app, "GET", "/api/jobs", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let active_ids: Vec<i64> = active
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_i64().unwrap())
        .collect();
    assert_eq!(active_ids, vec![open]);

    let (status, all) = admin(&app, "GET", "/api/jobs/all", None).await;
    assert_eq!(status, StatusCode::OK);
    let all_ids: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_i64().unwrap())
        .collect();
    assert_eq!(all_ids, vec![closed, open]);
}

#[tokio::test]
async fn partial_update_is_idempotent_and_leaves_other_fields() {
    let app = setup_app();
    let id = create_job(&app, engineer()).await;
    let (_, before) = send(&app, "GET", &format!("/api/jobs/{id}"), None, None).await;

    let patch = json!({ "salary": "$120k" });
    let uri = format!("/api/jobs/{id}");
    let (status, once) = admin(&app, "PUT", &uri, Some(patch.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (_, twice) = admin(&app, "PUT", &uri, Some(patch)).await;
    assert_eq!(once, twice);

    assert_eq!(once["salary"], "$120k");
    for field in [
        "id",
        "title",
        "company",
        "location",
        "job_type",
        "category",
        "description",
        "requirements",
        "benefits",
        "posted_date",
        "is_active",
    ] {
        assert_eq!(once[field], before[field], "{field} changed");
    }
}

#[tokio::test]
async fn update_rejects_blank_required_field_and_unknown_job() {
    let app = setup_app();
    let id = create_job(&app, engineer()).await;

    let (status, _) = admin(
        &app,
        "PUT",
        &format!("/api/jobs/{id}"),
        Some(json!({ "title": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = admin(&app, "PUT", "/api/jobs/999", Some(json!({ "salary": "1" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn application_is_submitted_as_pending() {
    let app = setup_app();
    let job_id = create_job(&app, engineer()).await;

    let (status, created) = send(
        &app,
        "POST",
        &format!("/api/jobs/{job_id}/apply"),
        None,
        Some(applicant("user@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Pending");
    assert_eq!(created["job_id"], job_id);
    assert_eq!(created["experience"], 4);
    assert!(created["applied_date"].is_string());

    let (_, job) = send(&app, "GET", &format!("/api/jobs/{job_id}"), None, None).await;
    assert_eq!(job["application_count"], 1);
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let app = setup_app();
    let job_id = create_job(&app, engineer()).await;

    for email in ["user", "user@example", "@example.com", "user@@example.com"] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(applicant(email)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{email} was accepted");
    }

    let (_, apps) = admin(&app, "GET", "/api/applications", None).await;
    assert_eq!(apps, json!([]));
}

#[tokio::test]
async fn missing_contact_fields_are_rejected() {
    let app = setup_app();
    let job_id = create_job(&app, engineer()).await;
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/jobs/{job_id}/apply"),
        None,
        Some(json!({ "name": "Ada", "email": "user@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn inactive_job_rejects_applications() {
    let app = setup_app();
    let job_id = create_job(&app, engineer()).await;
    let (status, _) = admin(
        &app,
        "PUT",
        &format!("/api/jobs/{job_id}"),
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/jobs/{job_id}/apply"),
        None,
        Some(applicant("user@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, stats) = admin(&app, "GET", "/api/stats", None).await;
    assert_eq!(stats["total_applications"], 0);
}

#[tokio::test]
async fn applying_to_unknown_job_is_not_found() {
    let app = setup_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/jobs/77/apply",
        None,
        Some(applicant("user@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn applications_list_is_enriched_with_job() {
    let app = setup_app();
    let job_id = create_job(&app, engineer()).await;
    send(
        &app,
        "POST",
        &format!("/api/jobs/{job_id}/apply"),
        None,
        Some(applicant("first@example.com")),
    )
    .await;
    send(
        &app,
        "POST",
        &format!("/api/jobs/{job_id}/apply"),
        None,
        Some(applicant("second@example.com")),
    )
    .await;

    let (status, apps) = admin(&app, "GET", "/api/applications", None).await;
    assert_eq!(status, StatusCode::OK);
    let apps = apps.as_array().unwrap();
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0]["email"], "second@example.com");
    for item in apps {
        assert_eq!(item["job_title"], "Engineer");
        assert_eq!(item["job_company"], "Acme");
    }
}

#[tokio::test]
async fn deleting_job_cascades_to_applications() {
    let app = setup_app();
    let keep = create_job(&app, engineer()).await;
    let doomed = create_job(&app, engineer()).await;
    for job_id in [keep, doomed] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(applicant("user@example.com")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = admin(&app, "DELETE", &format!("/api/jobs/{doomed}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job deleted");

    let (_, apps) = admin(&app, "GET", "/api/applications", None).await;
    let apps = apps.as_array().unwrap();
    assert_eq!(apps.len(), 1);
    assert!(apps.iter().all(|a| a["job_id"] == keep));

    let (status, _) = admin(&app, "DELETE", &format!("/api/jobs/{doomed}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_update_accepts_only_known_values() {
    let app = setup_app();
    let job_id = create_job(&app, engineer()).await;
    let (_, application) = send(
        &app,
        "POST",
        &format!("/api/jobs/{job_id}/apply"),
        None,
        Some(applicant("user@example.com")),
    )
    .await;
    let app_id = application["id"].as_i64().unwrap();
    let uri = format!("/api/applications/{app_id}");

    let (status, _) = admin(&app, "PUT", &uri, Some(json!({ "status": "Hired" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, apps) = admin(&app, "GET", "/api/applications", None).await;
    assert_eq!(apps[0]["status"], "Pending");

    let (status, updated) =
        admin(&app, "PUT", &uri, Some(json!({ "status": "Shortlisted" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Shortlisted");
    assert_eq!(updated["email"], application["email"]);
    assert_eq!(updated["applied_date"], application["applied_date"]);

    let (status, _) = admin(
        &app,
        "PUT",
        "/api/applications/999",
        Some(json!({ "status": "Rejected" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_count_jobs_and_applications_by_status() {
    let app = setup_app();
    let job_id = create_job(&app, engineer()).await;
    let mut closed = engineer();
    closed["is_active"] = json!(false);
    create_job(&app, closed).await;

    let mut app_ids = Vec::new();
    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        let (_, created) = send(
            &app,
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(applicant(email)),
        )
        .await;
        app_ids.push(created["id"].as_i64().unwrap());
    }
    admin(
        &app,
        "PUT",
        &format!("/api/applications/{}", app_ids[0]),
        Some(json!({ "status": "Reviewed" })),
    )
    .await;
    admin(
        &app,
        "PUT",
        &format!("/api/applications/{}", app_ids[1]),
        Some(json!({ "status": "Rejected" })),
    )
    .await;

    let (status, stats) = admin(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({
            "total_jobs": 2,
            "active_jobs": 1,
            "total_applications": 3,
            "applications_by_status": {
                "pending": 1,
                "reviewed": 1,
                "shortlisted": 0,
                "rejected": 1
            }
        })
    );
}

#[tokio::test]
async fn admin_endpoints_require_password_and_do_not_mutate() {
    let app = setup_app();
    let job_id = create_job(&app, engineer()).await;
    let (_, application) = send(
        &app,
        "POST",
        &format!("/api/jobs/{job_id}/apply"),
        None,
        Some(applicant("user@example.com")),
    )
    .await;
    let app_id = application["id"].as_i64().unwrap();

    let calls: Vec<(&str, String, Option<JsonValue>)> = vec![
        ("GET", "/api/jobs/all".into(), None),
        ("POST", "/api/jobs".into(), Some(engineer())),
        ("PUT", format!("/api/jobs/{job_id}"), Some(json!({ "title": "Changed" }))),
        ("DELETE", format!("/api/jobs/{job_id}"), None),
        ("GET", "/api/applications".into(), None),
        (
            "PUT",
            format!("/api/applications/{app_id}"),
            Some(json!({ "status": "Rejected" })),
        ),
        ("GET", "/api/stats".into(), None),
    ];

    for password in [None, Some("wrong")] {
        for (method, uri, body) in &calls {
            let (status, resp) = send(&app, method, uri, password, body.clone()).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
            assert_eq!(resp, json!({ "error": "Unauthorized" }));
        }
    }

    let (_, job) = send(&app, "GET", &format!("/api/jobs/{job_id}"), None, None).await;
    assert_eq!(job["title"], "Engineer");
    let (_, stats) = admin(&app, "GET", "/api/stats", None).await;
    assert_eq!(stats["total_jobs"], 1);
    assert_eq!(stats["applications_by_status"]["pending"], 1);
}

#[tokio::test]
async fn admin_gate_runs_before_lookup() {
    let app = setup_app();
    let (status, _) = send(&app, "DELETE", "/api/jobs/12345", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = setup_app();
    let (status, doc) = send(&app, "GET", "/api/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/api/jobs",
        "/api/jobs/all",
        "/api/jobs/{id}",
        "/api/jobs/{id}/apply",
        "/api/applications",
        "/api/applications/{id}",
        "/api/stats",
        "/health",
    ] {
        assert!(paths.contains_key(path), "{path} missing");
    }
}

async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| panic!("non-JSON body: {}", String::from_utf8_lossy(&bytes)));
    (status, body)
}

#[tokio::test]
async fn malformed_requests_get_json_bad_request() {
    let app = setup_app();

    let mut wrong_type = engineer();
    wrong_type["is_active"] = json!("yes");
    let (status, body) = admin(&app, "POST", "/api/jobs", Some(wrong_type)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let no_content_type = Request::builder()
        .method("POST")
        .uri("/api/jobs")
        .header("x-admin-password", ADMIN_PASSWORD)
        .body(Body::from(engineer().to_string()))
        .unwrap();
    let (status, body) = send_raw(&app, no_content_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let broken_json = Request::builder()
        .method("POST")
        .uri("/api/jobs")
        .header("x-admin-password", ADMIN_PASSWORD)
        .header("content-type", "application/json")
        .body(Body::from("{\"title\":"))
        .unwrap();
    let (status, body) = send_raw(&app, broken_json).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, "GET", "/api/jobs/abc", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = admin(
        &app,
        "PUT",
        "/api/applications/abc",
        Some(json!({ "status": "Reviewed" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, all) = admin(&app, "GET", "/api/jobs/all", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn whitespace_only_required_fields_are_rejected() {
    let app = setup_app();
    let (status, body) = admin(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({
            "title": "   ",
            "company": "  ",
            "location": " ",
            "description": " "
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("title: must not be blank"));
    let (_, all) = admin(&app, "GET", "/api/jobs/all", None).await;
    assert_eq!(all, json!([]));

    let job_id = create_job(&app, engineer()).await;
    let (status, _) = admin(
        &app,
        "PUT",
        &format!("/api/jobs/{job_id}"),
        Some(json!({ "company": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut blank_name = applicant("user@example.com");
    blank_name["name"] = json!("  ");
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/jobs/{job_id}/apply"),
        None,
        Some(blank_name),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn validation_errors_are_readable() {
    let app = setup_app();
    let (status, body) = admin(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({ "title": "Engineer", "company": "Acme", "location": "Remote" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("description: is required"), "{message}");
    assert!(!message.contains("Number("), "{message}");
}

#[tokio::test]
async fn blank_update_values_normalise_like_create() {
    let app = setup_app();
    let mut body = engineer();
    body["requirements"] = json!("Rust");
    body["salary"] = json!("$100k");
    let id = create_job(&app, body).await;

    let (status, updated) = admin(
        &app,
        "PUT",
        &format!("/api/jobs/{id}"),
        Some(json!({ "requirements": "", "salary": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["requirements"], JsonValue::Null);
    assert_eq!(updated["salary"], "Negotiable");
}
