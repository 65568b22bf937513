use std::sync::Arc;

use playerdesk_types::errors::{ApiError, ApplicationError};

use super::REMOTE_SUCCESS;
use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeletePlayer},
    repository::PlayerRepository,
};

pub struct DeletePlayerCommandHandler {}

impl DeletePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePlayer> for DeletePlayerCommandHandler {
    async fn handle(
        &self,
        command: DeletePlayer,
        players: &Arc<dyn PlayerRepository>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let status = players.destroy(&command.id).await?;

        if status != REMOTE_SUCCESS {
            return Err(ApiError::UnexpectedStatus {
                operation: "destroy",
                status,
            }
            .into());
        }

        tracing::info!(player_id = %command.id, "Player deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tests::{MockPlayerRepository, assert_handler_success, test_config};

    #[tokio::test]
    async fn test_delete_success() {
        let repo = MockPlayerRepository::new();
        let players: Arc<dyn PlayerRepository> = Arc::new(repo.clone());

        let result = DeletePlayerCommandHandler::new()
            .handle(
                DeletePlayer {
                    id: "12".to_string(),
                },
                &players,
                &test_config(),
            )
            .await;

        assert_handler_success(result);
        assert_eq!(repo.deletions(), vec!["12".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_failure_status() {
        let repo = MockPlayerRepository::new();
        repo.set_destroy_status(500);
        let players: Arc<dyn PlayerRepository> = Arc::new(repo);

        let result = DeletePlayerCommandHandler::new()
            .handle(
                DeletePlayer {
                    id: "12".to_string(),
                },
                &players,
                &test_config(),
            )
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Api(ApiError::UnexpectedStatus {
                operation: "destroy",
                status: 500
            }))
        ));
    }

    #[tokio::test]
    async fn test_delete_propagates_transport_failure() {
        let repo = MockPlayerRepository::new();
        repo.fail_mutations();
        let players: Arc<dyn PlayerRepository> = Arc::new(repo.clone());

        let result = DeletePlayerCommandHandler::new()
            .handle(
                DeletePlayer {
                    id: "12".to_string(),
                },
                &players,
                &test_config(),
            )
            .await;

        assert!(matches!(result, Err(ApplicationError::Infrastructure(_))));
        assert!(repo.deletions().is_empty());
    }
}
