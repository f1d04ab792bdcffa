use axum::{
    Json,
    extract::{Multipart, State},
};
use serde_json::{Value, json};
use tokio::task;

use pavilion_app::encoder::encode_avif;
use pavilion_types::StorageError;
use pavilion_types::identifier::{image_file_name, image_key, player_identifier};

use crate::handlers::ApiError;
use crate::http::AppState;

/// POST /api/v1/upload – Re-encode the uploaded photo as AVIF and store it
/// under the player's write-once key.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut member_id: Option<String> = None;
    let mut player_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_part)? {
        let name = field.name().unwrap_or_default().to_string();

        if field.file_name().is_some() {
            file_bytes = Some(field.bytes().await.map_err(bad_part)?.to_vec());
        } else if name == "member_id" {
            member_id = Some(field.text().await.map_err(bad_part)?);
        } else if name == "player_name" {
            player_name = Some(field.text().await.map_err(bad_part)?);
        }
    }

    let Some(raw) = file_bytes else {
        return Err(ApiError::Validation("No image uploaded".to_string()));
    };

    let identifier = player_identifier(member_id.as_deref(), player_name.as_deref());
    let file_name = image_file_name(&identifier);
    let key = image_key(&identifier);

    tracing::debug!(identifier = %identifier, key = %key, bytes = raw.len(), "processing upload");

    let encoded = task::spawn_blocking(move || encode_avif(&raw))
        .await
        .map_err(|e| ApiError::Upstream(format!("Image upload failed: {e}")))??;

    let image_url = state
        .store
        .put(&key, encoded, "image/avif")
        .await
        .inspect_err(|e| {
            if !matches!(e, StorageError::AlreadyExists { .. }) {
                tracing::error!("Image upload error: {e}");
            }
        })?;

    Ok(Json(json!({
        "imageUrl": image_url,
        "fileName": file_name,
        "playerIdentifier": identifier,
    })))
}

fn bad_part(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::Validation(format!("Malformed multipart body: {err}"))
}
