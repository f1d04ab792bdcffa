use axum::{Json, extract::State};
use serde_json::{Map, Value, json};

use pavilion_types::{PlayerProfile, ProfileError};

use crate::handlers::ApiError;
use crate::http::AppState;

const REQUIRED_FIELDS: [&str; 10] = [
    "member_id",
    "player_name",
    "nationality",
    "role",
    "birth_date",
    "batting_style",
    "bowling_hand",
    "bowling_style",
    "debut_year",
    "image_path",
];

/// POST /api/v1/submit – Validate and persist a player profile.
pub async fn submit_profile(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let profile = parse_submission(&body)?;

    state.profiles.insert(&profile).await.inspect_err(|e| {
        if !matches!(e, ProfileError::AlreadyExists { .. }) {
            tracing::error!("Player submission error: {e}");
        }
    })?;

    Ok(Json(json!({
        "success": true,
        "message": "Player profile created successfully",
        "data": {
            "member_id": profile.member_id,
            "player_name": profile.player_name,
        },
    })))
}

/// Checks the ten required fields and coerces the numeric ones. Absent,
/// null and blank-string values all count as missing.
fn parse_submission(body: &Value) -> Result<PlayerProfile, ApiError> {
    let Some(fields) = body.as_object() else {
        return Err(ApiError::Validation(
            "Invalid JSON format in request".to_string(),
        ));
    };

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| is_blank(fields.get(*field)))
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let member_id = int_field(fields, "member_id")?;
    let debut_year = i32::try_from(int_field(fields, "debut_year")?)
        .map_err(|_| ApiError::Validation("Field debut_year must be a number".to_string()))?;

    Ok(PlayerProfile {
        member_id,
        player_name: text_field(fields, "player_name"),
        birth_date: text_field(fields, "birth_date"),
        nationality: text_field(fields, "nationality"),
        role: text_field(fields, "role"),
        batting_style: text_field(fields, "batting_style"),
        bowling_hand: text_field(fields, "bowling_hand"),
        bowling_style: text_field(fields, "bowling_style"),
        debut_year,
        image_path: text_field(fields, "image_path"),
    })
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn text_field(fields: &Map<String, Value>, name: &str) -> String {
    match &fields[name] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn int_field(fields: &Map<String, Value>, name: &str) -> Result<i64, ApiError> {
    let parsed = match &fields[name] {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ApiError::Validation(format!("Field {name} must be a number")))
}
