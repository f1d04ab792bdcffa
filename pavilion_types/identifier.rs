//! Derivation of the identifier that deduplicates both profile rows and
//! stored photos.

/// Picks the identifier for a player: the member id when present, otherwise
/// a sanitized form of the player name, otherwise `"unknown"`.
pub fn player_identifier(member_id: Option<&str>, player_name: Option<&str>) -> String {
    if let Some(id) = member_id {
        let id = id.trim();
        if !id.is_empty() {
            return id.to_string();
        }
    }

    if let Some(name) = player_name {
        let name = name.trim();
        if !name.is_empty() {
            return sanitize_name(name);
        }
    }

    "unknown".to_string()
}

/// Object-store key for a player photo.
pub fn image_key(identifier: &str) -> String {
    format!("players/{}", image_file_name(identifier))
}

/// File name for a player photo. Deliberately carries no timestamp so that a
/// second upload for the same player collides instead of piling up copies.
pub fn image_file_name(identifier: &str) -> String {
    format!("player_{identifier}.avif")
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
