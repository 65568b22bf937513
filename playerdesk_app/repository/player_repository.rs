use playerdesk_types::errors::ApplicationError;
use playerdesk_types::player::Player;

/// Access to the remote players API.
///
/// Mutations return the raw HTTP status: deciding what counts as success
/// belongs to the command handlers, not to the transport.
#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns the whole collection, in the order the API sent it.
    async fn list(&self) -> Result<Vec<Player>, ApplicationError>;

    /// Posts the full record to the update endpoint.
    async fn update(&self, id: &str, player: &Player) -> Result<u16, ApplicationError>;

    /// Calls the destroy endpoint.
    async fn destroy(&self, id: &str) -> Result<u16, ApplicationError>;
}
