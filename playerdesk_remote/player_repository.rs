use async_trait::async_trait;
use reqwest::{Client, Url};

use playerdesk_app::repository::PlayerRepository;
use playerdesk_types::{
    errors::{ApiError, ApplicationError},
    player::{Player, PlayersEnvelope},
};

/// `PlayerRepository` backed by the remote HTTP API.
///
/// No retry and no timeout: a slow API makes the request slow.
#[derive(Debug, Clone)]
pub struct HttpPlayerRepository {
    client: Client,
    base_url: Url,
}

impl HttpPlayerRepository {
    pub fn new(base_url: &str) -> Result<Self, ApplicationError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApplicationError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()).into());
        }

        Ok(Self { client, base_url })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApplicationError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl PlayerRepository for HttpPlayerRepository {
    async fn list(&self) -> Result<Vec<Player>, ApplicationError> {
        let url = self.endpoint(&["api", "players"])?;
        tracing::debug!(%url, "Fetching players");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                operation: "list",
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(ApiError::from)?;
        let envelope: PlayersEnvelope =
            serde_json::from_slice(&body).map_err(|e| ApiError::MalformedBody {
                operation: "list",
                reason: e.to_string(),
            })?;

        Ok(envelope.data)
    }

    async fn update(&self, id: &str, player: &Player) -> Result<u16, ApplicationError> {
        let url = self.endpoint(&["api", "players", "update", id])?;
        tracing::debug!(%url, "Updating player");

        let response = self
            .client
            .post(url)
            .json(player)
            .send()
            .await
            .map_err(ApiError::from)?;

        Ok(response.status().as_u16())
    }

    async fn destroy(&self, id: &str) -> Result<u16, ApplicationError> {
        let url = self.endpoint(&["api", "players", "destroy", id])?;
        tracing::debug!(%url, "Deleting player");

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(ApiError::from)?;

        Ok(response.status().as_u16())
    }
}
