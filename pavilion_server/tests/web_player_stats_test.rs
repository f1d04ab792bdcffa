mod test_utils;

use serde_json::Value;

use crate::test_utils::tests::{mock_roster_server, setup_web_app};

#[tokio::test]
async fn player_stats_returns_the_roster() {
    let roster_json = r#"{"players":[
        {"member_id":1001,"name":"Alice Example"},
        {"member_id":1002,"name":"Bob Example"}
    ]}"#;
    let (roster_url, _handle) = mock_roster_server(200, roster_json).await;
    let app = setup_web_app(&roster_url).await;

    let res = app
        .client
        .get(format!("{}/api/v1/player-stats", app.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    let players = body.as_array().expect("body should be a JSON array");
    assert_eq!(players.len(), 2);
    assert_eq!(players[0]["member_id"], 1001);
    assert_eq!(players[1]["name"], "Bob Example");
}

#[tokio::test]
async fn player_stats_maps_upstream_failure_to_500() {
    let (roster_url, _handle) = mock_roster_server(500, r#"{"error":"boom"}"#).await;
    let app = setup_web_app(&roster_url).await;

    let res = app
        .client
        .get(format!("{}/api/v1/player-stats", app.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Failed to fetch players");
}

#[tokio::test]
async fn player_stats_without_players_field_is_empty() {
    let (roster_url, _handle) = mock_roster_server(200, r#"{"season":"2025"}"#).await;
    let app = setup_web_app(&roster_url).await;

    let res = app
        .client
        .get(format!("{}/api/v1/player-stats", app.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);
}
