use async_trait::async_trait;
use std::sync::Arc;

use playerdesk_types::errors::{AppError, ApplicationError};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetPlayerById},
    repository::PlayerRepository,
};

/// Fetches the whole collection and picks the first player whose id matches.
pub struct GetPlayerByIdHandler {}

impl GetPlayerByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetPlayerById> for GetPlayerByIdHandler {
    async fn handle(
        &self,
        query: GetPlayerById,
        players: &Arc<dyn PlayerRepository>,
        _config: &Arc<Config>,
    ) -> Result<<GetPlayerById as Query>::Output, ApplicationError> {
        players
            .list()
            .await?
            .into_iter()
            .find(|player| player.id.matches(&query.id))
            .ok_or_else(|| AppError::PlayerNotFound(query.id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tests::{MockPlayerRepository, player_fixture, test_config};
    use playerdesk_types::player::{Player, PlayerId};
    use serde_json::json;

    async fn lookup(repo: MockPlayerRepository, id: &str) -> Result<Player, ApplicationError> {
        let players: Arc<dyn PlayerRepository> = Arc::new(repo);
        GetPlayerByIdHandler::new()
            .handle(
                GetPlayerById { id: id.to_string() },
                &players,
                &test_config(),
            )
            .await
    }

    #[tokio::test]
    async fn test_finds_player_by_id() {
        let repo = MockPlayerRepository::with_players(vec![
            player_fixture(1, false),
            player_fixture(2, true),
        ]);

        let player = lookup(repo, "2").await.unwrap();

        assert_eq!(player.id, PlayerId::from(2));
        assert!(player.active);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let repo = MockPlayerRepository::with_players(vec![player_fixture(1, true)]);

        let err = lookup(repo, "99").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(
            err,
            ApplicationError::App(AppError::PlayerNotFound(id)) if id == "99"
        ));
    }

    #[tokio::test]
    async fn test_first_match_wins_on_duplicate_ids() {
        let first: Player =
            serde_json::from_value(json!({"id": 5, "active": 1, "name": "first"})).unwrap();
        let second: Player =
            serde_json::from_value(json!({"id": "5", "active": 0, "name": "second"})).unwrap();
        let repo = MockPlayerRepository::with_players(vec![first, second]);

        let player = lookup(repo, "5").await.unwrap();

        assert_eq!(player.attributes["name"], json!("first"));
    }

    #[tokio::test]
    async fn test_lookup_fails_when_listing_fails() {
        let repo = MockPlayerRepository::new();
        repo.fail_listing();

        let err = lookup(repo, "1").await.unwrap_err();

        assert!(!err.is_not_found());
    }
}
