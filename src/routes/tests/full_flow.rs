use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service};
use serde_json::{Value, json};

use super::{memory_store, read_json, test_app};
use crate::models::ErrorCode;

fn new_assignment() -> Value {
    json!({
        "title": "Algorithm Analysis",
        "subjectId": "2",
        "description": "Analyze the time and space complexity of common algorithms",
        "dueDate": "2023-12-15",
        "type": "homework",
        "maxGrade": 100,
        "criteria": "Correct analysis: 70%, Clarity: 30%"
    })
}

#[actix_web::test]
async fn submit_grade_appeal_review() {
    let app = test_app!(memory_store());

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri("/api/assignments")
            .set_json(new_assignment())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["status"], "upcoming");
    let assignment_id = body["data"]["id"].as_str().unwrap().to_string();

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/assignments/{assignment_id}/submit"))
            .set_json(json!({
                "studentId": "student1",
                "studentName": "John Doe",
                "files": ["/uploads/solution.png"]
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    let submission_id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(submission_id.starts_with("sub_"));
    assert_eq!(body["data"]["status"], "submitted");

    // 未评分时不能申诉
    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/submissions/{submission_id}/appeal"))
            .set_json(json!({"reason": "Too early"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["code"], ErrorCode::AppealNotAllowed as i32);

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/submissions/{submission_id}/grade"))
            .set_json(json!({"grade": 85, "feedback": "Good"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["grade"], 85);
    assert_eq!(body["data"]["status"], "graded");

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/submissions/{submission_id}/appeal"))
            .set_json(json!({"reason": "Question 3 was marked wrong"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert!(body["data"]["id"].as_str().unwrap().starts_with("appeal_"));
    assert_eq!(body["data"]["originalGrade"], 85);
    assert_eq!(body["data"]["status"], "pending");

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/api/assignments/{assignment_id}"))
            .to_request(),
    )
    .await;
    let body = read_json(resp).await;
    assert_eq!(body["data"]["hasAppeal"], true);
    assert_eq!(body["data"]["status"], "graded");

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/submissions/{submission_id}/review-appeal"))
            .set_json(json!({"grade": 90, "feedback": "Regraded"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["grade"], 90);
    assert_eq!(body["data"]["appeal"]["status"], "reviewed");
    assert!(body["data"]["appeal"]["reviewedAt"].is_string());

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/api/assignments/{assignment_id}"))
            .to_request(),
    )
    .await;
    let body = read_json(resp).await;
    assert_eq!(body["data"]["hasAppeal"], false);

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri("/api/students/student1/submissions")
            .to_request(),
    )
    .await;
    let body = read_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["grade"], 90);
}

#[actix_web::test]
async fn submit_to_unknown_assignment_is_not_found() {
    let app = test_app!(memory_store());

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri("/api/assignments/missing/submit")
            .set_json(json!({"studentId": "s1", "studentName": "Ann", "files": []}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["code"], ErrorCode::AssignmentNotFound as i32);

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri("/api/assignments/missing/submissions")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn review_without_appeal_is_not_found() {
    let app = test_app!(memory_store());

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri("/api/submissions/sub_unknown/review-appeal")
            .set_json(json!({"grade": 90, "feedback": "n/a"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["code"], ErrorCode::AppealNotFound as i32);
}

#[actix_web::test]
async fn put_assignment_keeps_submissions_when_omitted() {
    let app = test_app!(memory_store());

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri("/api/assignments")
            .set_json(new_assignment())
            .to_request(),
    )
    .await;
    let body = read_json(resp).await;
    let assignment_id = body["data"]["id"].as_str().unwrap().to_string();

    call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/assignments/{assignment_id}/submit"))
            .set_json(json!({"studentId": "s1", "studentName": "Ann", "files": []}))
            .to_request(),
    )
    .await;

    let resp = call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/api/assignments/{assignment_id}"))
            .set_json(json!({
                "title": "Algorithm Analysis (revised)",
                "subjectId": "2",
                "dueDate": "2023-12-20",
                "type": "homework",
                "status": "submitted",
                "maxGrade": 100
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["title"], "Algorithm Analysis (revised)");
    assert_eq!(body["data"]["submissions"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn put_assignment_derives_has_appeal_from_submissions() {
    let app = test_app!(memory_store());

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri("/api/assignments")
            .set_json(new_assignment())
            .to_request(),
    )
    .await;
    let body = read_json(resp).await;
    let assignment_id = body["data"]["id"].as_str().unwrap().to_string();

    let resp = call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/api/assignments/{assignment_id}"))
            .set_json(json!({
                "title": "Algorithm Analysis",
                "subjectId": "2",
                "dueDate": "2023-12-20",
                "type": "homework",
                "status": "upcoming",
                "maxGrade": 100,
                "hasAppeal": true
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["hasAppeal"], false);

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/api/assignments/{assignment_id}"))
            .to_request(),
    )
    .await;
    let body = read_json(resp).await;
    assert_eq!(body["data"]["hasAppeal"], false);
}

#[actix_web::test]
async fn grade_out_of_range_is_rejected() {
    let app = test_app!(memory_store());

    let resp = call_service(
        &app,
        TestRequest::post()
            .uri("/api/submissions/sub_x/grade")
            .set_json(json!({"grade": -5, "feedback": "?"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["code"], ErrorCode::ValidationFailed as i32);
}
