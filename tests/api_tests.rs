mod test_jobs;
mod test_utils;

use reqwest::{
    multipart::{Form, Part},
    StatusCode,
};
use serde_json::{json, Value};
use test_jobs::{sample_job, sample_resume};
use test_utils::*;
use uuid::Uuid;

#[actix_rt::test]
async fn home_responds_with_welcome() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Ok");
}

#[actix_rt::test]
async fn anonymous_reads_return_empty_results() {
    let app = TestApp::spawn().await;

    let saved: Value = app.client.get(app.url("/api/v1/saved-jobs")).send().await.unwrap().json().await.unwrap();
    let status: Value = app
        .client
        .get(app.url("/api/v1/applied-jobs/job-1/status"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let pending: Value = app.client.get(app.url("/api/v1/tracker/pending")).send().await.unwrap().json().await.unwrap();

    let resume = app.client.get(app.url("/api/v1/resume")).send().await.unwrap();
    assert_eq!(resume.status(), StatusCode::OK);
    assert_eq!(resume.json::<Value>().await.unwrap(), Value::Null);

    let applied = app.client.get(app.url("/api/v1/applied-jobs/job-1")).send().await.unwrap();
    assert_eq!(applied.status(), StatusCode::OK);
    assert_eq!(applied.json::<Value>().await.unwrap(), Value::Null);

    assert_eq!(saved, json!([]));
    assert_eq!(status["applied"], false);
    assert!(pending["job"].is_null());
}

#[actix_rt::test]
async fn anonymous_mutations_are_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/v1/saved-jobs"))
        .json(&sample_job("job-1"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "User must be authenticated to save jobs");
}

#[actix_rt::test]
async fn invalid_tokens_are_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/v1/saved-jobs"))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn saving_twice_lists_the_job_once() {
    let app = TestApp::spawn().await;
    let token = app.token_for(&Uuid::new_v4());

    for _ in 0..2 {
        let response = app
            .client
            .post(app.url("/api/v1/saved-jobs"))
            .bearer_auth(&token)
            .json(&sample_job("job-1"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let saved: Vec<Value> = app
        .client
        .get(app.url("/api/v1/saved-jobs"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["job_id"], "job-1");

    let delete = app
        .client
        .delete(app.url("/api/v1/saved-jobs/job-1"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);
}

#[actix_rt::test]
async fn application_status_can_be_updated() {
    let app = TestApp::spawn().await;
    let token = app.token_for(&Uuid::new_v4());

    let created = app
        .client
        .post(app.url("/api/v1/applied-jobs"))
        .bearer_auth(&token)
        .json(&json!({ "job": sample_job("job-1") }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let updated = app
        .client
        .patch(app.url("/api/v1/applied-jobs/job-1"))
        .bearer_auth(&token)
        .json(&json!({ "status": "Interview", "notes": "phone screen done" }))
        .send()
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);

    let body: Value = updated.json().await.unwrap();
    assert_eq!(body["application_status"], "Interview");
    assert_eq!(body["notes"], "phone screen done");

    let missing = app
        .client
        .patch(app.url("/api/v1/applied-jobs/job-404"))
        .bearer_auth(&token)
        .json(&json!({ "status": "Offer" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn apply_click_then_dismiss_clears_the_prompt() {
    let app = TestApp::spawn().await;
    let token = app.token_for(&Uuid::new_v4());

    let click: Value = app
        .client
        .post(app.url("/api/v1/tracker/apply-click"))
        .bearer_auth(&token)
        .json(&json!({ "job": sample_job("job-1") }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(click["apply_link"], "https://jobs.test/job-1/apply");

    let pending: Value = app
        .client
        .get(app.url("/api/v1/tracker/pending"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(pending["job"]["job_id"], "job-1");

    let dismissed = app
        .client
        .post(app.url("/api/v1/tracker/dismiss/job-1"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(dismissed.status(), StatusCode::NO_CONTENT);

    let prompt: Value = app
        .client
        .get(app.url("/api/v1/tracker/prompt/job-1"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(prompt["should_prompt"], false);

    let recent: Vec<Value> = app
        .client
        .get(app.url("/api/v1/tracker/recent"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);
}

#[actix_rt::test]
async fn confirming_an_application_records_it() {
    let app = TestApp::spawn().await;
    let user_id = Uuid::new_v4();
    let token = app.token_for(&user_id);

    let response = app
        .client
        .post(app.url("/api/v1/tracker/confirm"))
        .bearer_auth(&token)
        .json(&json!({ "job": sample_job("job-1"), "notes": "Referred by Sam" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.backends.applied_jobs.count(&user_id), 1);
}

#[actix_rt::test]
async fn resume_upload_is_parsed_and_stored() {
    let app = TestApp::spawn_with(StubJobService {
        resume: sample_resume(),
        ..Default::default()
    })
    .await;
    let token = app.token_for(&Uuid::new_v4());

    let part = Part::bytes(b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n".to_vec())
        .file_name("cv.pdf")
        .mime_str("application/pdf")
        .unwrap();
    let response = app
        .client
        .post(app.url("/api/v1/resume"))
        .bearer_auth(&token)
        .multipart(Form::new().part("file", part))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["persisted"], true);
    assert_eq!(body["resume"]["basic_info"]["name"], "Jane Doe");

    let profile = app
        .client
        .get(app.url("/api/v1/resume"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(profile.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn unsupported_resume_type_is_a_bad_request() {
    let app = TestApp::spawn().await;

    let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    let part = Part::bytes(png).file_name("cv.png");
    let response = app
        .client
        .post(app.url("/api/v1/resume"))
        .multipart(Form::new().part("file", part))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn recommended_jobs_without_location_ask_for_one() {
    let app = TestApp::spawn().await;

    let body: Value = app
        .client
        .get(app.url("/api/v1/jobs/recommended?role=Backend%20Engineer"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["outcome"], "location_required");
    assert_eq!(body["role"], "Backend Engineer");
    assert_eq!(body["next_view"], json!({ "view": "location_prompt", "role": "Backend Engineer" }));
}

#[actix_rt::test]
async fn job_search_returns_listings() {
    let app = TestApp::spawn_with(StubJobService {
        jobs: vec![sample_job("job-1"), sample_job("job-2")],
        ..Default::default()
    })
    .await;

    let response = app
        .client
        .get(app.url("/api/v1/jobs/search?role=Rust%20Engineer&location=Berlin"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let jobs: Vec<Value> = response.json().await.unwrap();
    assert_eq!(jobs.len(), 2);
}

#[actix_rt::test]
async fn empty_chat_query_is_a_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/v1/chat"))
        .json(&json!({ "query": "", "job_type": "software engineer" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn oversized_uploads_are_refused() {
    let mut config = test_config();
    config.max_resume_bytes = 1024;
    let app = TestApp::spawn_with_config(config, StubJobService::default()).await;
    let token = app.token_for(&Uuid::new_v4());

    let mut bytes = b"%PDF-1.7\n".to_vec();
    bytes.resize(4096, b' ');
    let part = Part::bytes(bytes)
        .file_name("cv.pdf")
        .mime_str("application/pdf")
        .unwrap();
    let response = app
        .client
        .post(app.url("/api/v1/resume"))
        .bearer_auth(&token)
        .multipart(Form::new().part("file", part))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());

    let profile = app
        .client
        .get(app.url("/api/v1/resume"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(profile.status(), StatusCode::NOT_FOUND);
}
