use std::sync::Arc;

use playerdesk_types::errors::{ApiError, ApplicationError};

use super::REMOTE_SUCCESS;
use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayer},
    repository::PlayerRepository,
};

pub struct UpdatePlayerCommandHandler {}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    async fn handle(
        &self,
        command: UpdatePlayer,
        players: &Arc<dyn PlayerRepository>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let status = players.update(&command.id, &command.player).await?;

        if status != REMOTE_SUCCESS {
            return Err(ApiError::UnexpectedStatus {
                operation: "update",
                status,
            }
            .into());
        }

        tracing::info!(player_id = %command.id, "Player updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tests::{
        MockPlayerRepository, assert_handler_success, player_fixture, test_config,
    };
    use serde_json::json;

    fn command() -> UpdatePlayer {
        UpdatePlayer {
            id: "1".to_string(),
            player: player_fixture(1, true),
        }
    }

    #[tokio::test]
    async fn test_update_sends_record_with_integer_active_flag() {
        let repo = MockPlayerRepository::with_players(vec![player_fixture(1, true)]);
        let players: Arc<dyn PlayerRepository> = Arc::new(repo.clone());

        let result = UpdatePlayerCommandHandler::new()
            .handle(command(), &players, &test_config())
            .await;
        assert_handler_success(result);

        let updates = repo.updates();
        assert_eq!(updates.len(), 1);
        let (id, body) = &updates[0];
        assert_eq!(id, "1");
        assert_eq!(body["active"], json!(1));
        assert_eq!(body["id"], json!(1));
    }

    #[tokio::test]
    async fn test_update_rejects_non_200_status() {
        for status in [201, 204, 404, 500] {
            let repo = MockPlayerRepository::new();
            repo.set_update_status(status);
            let players: Arc<dyn PlayerRepository> = Arc::new(repo);

            let result = UpdatePlayerCommandHandler::new()
                .handle(command(), &players, &test_config())
                .await;

            assert!(
                matches!(
                    result,
                    Err(ApplicationError::Api(ApiError::UnexpectedStatus { status: s, .. })) if s == status
                ),
                "status {status} should be a failure"
            );
        }
    }

    #[tokio::test]
    async fn test_update_propagates_transport_failure() {
        let repo = MockPlayerRepository::new();
        repo.fail_mutations();
        let players: Arc<dyn PlayerRepository> = Arc::new(repo);

        let result = UpdatePlayerCommandHandler::new()
            .handle(command(), &players, &test_config())
            .await;

        assert!(result.is_err());
    }
}
