use async_trait::async_trait;
use std::sync::Arc;

use playerdesk_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListPlayers},
    repository::PlayerRepository,
};

pub struct ListPlayersHandler {}

impl ListPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListPlayers> for ListPlayersHandler {
    async fn handle(
        &self,
        _query: ListPlayers,
        players: &Arc<dyn PlayerRepository>,
        _config: &Arc<Config>,
    ) -> Result<<ListPlayers as Query>::Output, ApplicationError> {
        players.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tests::{MockPlayerRepository, player_fixture, test_config};
    use playerdesk_types::player::PlayerId;

    #[tokio::test]
    async fn test_list_players_keeps_remote_order() {
        let repo = MockPlayerRepository::with_players(vec![
            player_fixture(3, true),
            player_fixture(1, false),
            player_fixture(2, true),
        ]);
        let players: Arc<dyn PlayerRepository> = Arc::new(repo);

        let result = ListPlayersHandler::new()
            .handle(ListPlayers, &players, &test_config())
            .await
            .unwrap();

        let ids: Vec<PlayerId> = result.into_iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                PlayerId::from(3),
                PlayerId::from(1),
                PlayerId::from(2)
            ]
        );
    }

    #[tokio::test]
    async fn test_list_players_propagates_remote_failure() {
        let repo = MockPlayerRepository::new();
        repo.fail_listing();
        let players: Arc<dyn PlayerRepository> = Arc::new(repo);

        let result = ListPlayersHandler::new()
            .handle(ListPlayers, &players, &test_config())
            .await;

        assert!(matches!(result, Err(ApplicationError::Api(_))));
    }
}
