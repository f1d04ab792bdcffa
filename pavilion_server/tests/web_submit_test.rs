mod test_utils;

use serde_json::{Value, json};

use pavilion_app::ProfileRepository;

use crate::test_utils::tests::{sample_submission, setup_web_app};

const NO_ROSTER: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn submit_creates_a_profile_once_then_conflicts() {
    let app = setup_web_app(NO_ROSTER).await;
    let url = format!("{}/api/v1/submit", app.base_url);
    let submission = sample_submission("2001");

    let first = app.client.post(&url).json(&submission).send().await.unwrap();
    assert_eq!(first.status(), 200);

    let body: Value = first.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["member_id"], 2001);
    assert_eq!(body["data"]["player_name"], "Test Player");

    let stored = app.profiles.find_by_member_id(2001).await.unwrap().unwrap();
    assert_eq!(stored.player_name, "Test Player");
    assert_eq!(stored.debut_year, 2015, "debut_year string should coerce");

    // Identical resubmission must hit the uniqueness guard.
    let second = app.client.post(&url).json(&submission).send().await.unwrap();
    assert_eq!(second.status(), 409);

    let body: Value = second.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Test Player"));
    assert!(message.contains("2001"));
    assert_eq!(app.profiles.row_count(), 1, "conflict must not write");
}

#[tokio::test]
async fn submit_lists_missing_fields() {
    let app = setup_web_app(NO_ROSTER).await;

    let mut submission = sample_submission("2002");
    submission.as_object_mut().unwrap().remove("bowling_style");
    submission["nationality"] = json!("");

    let res = app
        .client
        .post(format!("{}/api/v1/submit", app.base_url))
        .json(&submission)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);

    let body: Value = res.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Missing required fields:"));
    assert!(message.contains("bowling_style"));
    assert!(message.contains("nationality"));
    assert_eq!(app.profiles.row_count(), 0);
}

#[tokio::test]
async fn submit_rejects_each_single_missing_field() {
    let app = setup_web_app(NO_ROSTER).await;
    let url = format!("{}/api/v1/submit", app.base_url);

    let all_fields = sample_submission("2003");
    for field in all_fields.as_object().unwrap().keys() {
        let mut submission = all_fields.clone();
        submission.as_object_mut().unwrap().remove(field);

        let res = app.client.post(&url).json(&submission).send().await.unwrap();
        assert_eq!(res.status(), 400, "missing {field} should be rejected");

        let body: Value = res.json().await.unwrap();
        assert!(
            body["error"].as_str().unwrap().contains(field),
            "error should name {field}"
        );
    }

    assert_eq!(app.profiles.row_count(), 0);
}

#[tokio::test]
async fn submit_rejects_non_numeric_member_id() {
    let app = setup_web_app(NO_ROSTER).await;

    let mut submission = sample_submission("2004");
    submission["member_id"] = json!("twenty");

    let res = app
        .client
        .post(format!("{}/api/v1/submit", app.base_url))
        .json(&submission)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);

    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("member_id"));
    assert_eq!(app.profiles.row_count(), 0);
}
