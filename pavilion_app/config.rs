use dotenvy::dotenv;
use std::env;

pub const DEFAULT_ROSTER_BASE_URL: &str = "http://play-cricket.com/api/v2";

/// Process-wide configuration, built once at startup and passed by reference
/// to each client component.
pub struct Config {
    pub port: u16,
    pub roster_base_url: String,
    pub roster_api_token: String,
    pub roster_site_id: String,
    pub roster_include_everyone: bool,
    pub roster_include_historic: bool,
    pub r2_account_id: String,
    pub r2_bucket: String,
    pub r2_access_key: String,
    pub r2_secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = match env::var("PAVILION_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let roster_base_url = match env::var("PLAY_CRICKET_BASE_URL") {
            Ok(val) => val,
            Err(_) => DEFAULT_ROSTER_BASE_URL.to_string(),
        };

        Self {
            port,
            roster_base_url,
            roster_api_token: required("PLAY_CRICKET_API_TOKEN"),
            roster_site_id: required("PLAY_CRICKET_SITE_ID"),
            roster_include_everyone: yes_no("PLAY_CRICKET_INCLUDE_EVERYONE"),
            roster_include_historic: yes_no("PLAY_CRICKET_INCLUDE_HISTORIC"),
            r2_account_id: required("CLOUDFLARE_ACCOUNT_ID"),
            r2_bucket: required("CLOUDFLARE_R2_BUCKET"),
            r2_access_key: required("CLOUDFLARE_ACCESS_KEY"),
            r2_secret_key: required("CLOUDFLARE_SECRET_KEY"),
        }
    }
}

fn required(key: &'static str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => panic!("You need to set env {key}"),
    }
}

/// The roster inclusion flags are literal `yes`/`no` strings; anything else
/// means `no`.
fn yes_no(key: &'static str) -> bool {
    matches!(env::var(key).as_deref(), Ok("yes"))
}
