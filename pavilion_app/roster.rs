//! Client for the Play-Cricket roster API.

use serde::Deserialize;

use pavilion_types::{PlayerSummary, RosterError};

use crate::config::Config;

pub struct RosterClient {
    http: reqwest::Client,
    base_url: String,
    site_id: String,
    api_token: String,
    include_everyone: bool,
    include_historic: bool,
}

#[derive(Deserialize)]
struct RosterResponse {
    #[serde(default)]
    players: Vec<PlayerSummary>,
}

impl RosterClient {
    pub fn new(config: &Config) -> Self {
        Self::from_parts(
            &config.roster_base_url,
            &config.roster_site_id,
            &config.roster_api_token,
            config.roster_include_everyone,
            config.roster_include_historic,
        )
    }

    pub fn from_parts(
        base_url: &str,
        site_id: &str,
        api_token: &str,
        include_everyone: bool,
        include_historic: bool,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            site_id: site_id.to_string(),
            api_token: api_token.to_string(),
            include_everyone,
            include_historic,
        }
    }

    /// Fetches the current roster. A response without a `players` field is
    /// an empty roster, not an error.
    pub async fn list_players(&self) -> Result<Vec<PlayerSummary>, RosterError> {
        let url = format!("{}/sites/{}/players", self.base_url, self.site_id);
        let params = [
            ("api_token", self.api_token.as_str()),
            ("include_everyone", yes_no(self.include_everyone)),
            ("include_historic", yes_no(self.include_historic)),
        ];

        let resp = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| RosterError::Unreachable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RosterError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: RosterResponse = resp
            .json()
            .await
            .map_err(|e| RosterError::Unreachable(e.to_string()))?;

        Ok(body.players)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
