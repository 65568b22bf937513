#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    use playerdesk_types::{
        errors::{ApiError, ApplicationError},
        player::Player,
    };

    use crate::{config::Config, repository::PlayerRepository};

    struct MockState {
        players: Vec<Player>,
        fail_listing: bool,
        fail_mutations: bool,
        update_status: u16,
        destroy_status: u16,
        updates: Vec<(String, Value)>,
        deletions: Vec<String>,
    }

    /// In-memory stand-in for the remote API. Clones share the same state.
    #[derive(Clone)]
    pub struct MockPlayerRepository {
        state: Arc<Mutex<MockState>>,
    }

    impl MockPlayerRepository {
        pub fn new() -> Self {
            Self::with_players(Vec::new())
        }

        pub fn with_players(players: Vec<Player>) -> Self {
            Self {
                state: Arc::new(Mutex::new(MockState {
                    players,
                    fail_listing: false,
                    fail_mutations: false,
                    update_status: 200,
                    destroy_status: 200,
                    updates: Vec::new(),
                    deletions: Vec::new(),
                })),
            }
        }

        pub fn fail_listing(&self) {
            self.state.lock().unwrap().fail_listing = true;
        }

        pub fn fail_mutations(&self) {
            self.state.lock().unwrap().fail_mutations = true;
        }

        pub fn set_update_status(&self, status: u16) {
            self.state.lock().unwrap().update_status = status;
        }

        pub fn set_destroy_status(&self, status: u16) {
            self.state.lock().unwrap().destroy_status = status;
        }

        /// Update calls received so far, with the JSON body as it would go on the wire.
        pub fn updates(&self) -> Vec<(String, Value)> {
            self.state.lock().unwrap().updates.clone()
        }

        pub fn deletions(&self) -> Vec<String> {
            self.state.lock().unwrap().deletions.clone()
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn list(&self) -> Result<Vec<Player>, ApplicationError> {
            let state = self.state.lock().unwrap();
            if state.fail_listing {
                return Err(ApiError::MalformedBody {
                    operation: "list",
                    reason: "expected value at line 1 column 1".to_string(),
                }
                .into());
            }
            Ok(state.players.clone())
        }

        async fn update(&self, id: &str, player: &Player) -> Result<u16, ApplicationError> {
            let mut state = self.state.lock().unwrap();
            if state.fail_mutations {
                return Err(ApplicationError::Infrastructure(
                    "connection refused".to_string(),
                ));
            }
            state
                .updates
                .push((id.to_string(), serde_json::to_value(player)?));
            Ok(state.update_status)
        }

        async fn destroy(&self, id: &str) -> Result<u16, ApplicationError> {
            let mut state = self.state.lock().unwrap();
            if state.fail_mutations {
                return Err(ApplicationError::Infrastructure(
                    "connection refused".to_string(),
                ));
            }
            state.deletions.push(id.to_string());
            Ok(state.destroy_status)
        }
    }

    pub fn test_config() -> Arc<Config> {
        Arc::new(Config {
            api_base_url: "http://127.0.0.1:9".to_string(),
            port: 0,
            cookie_secret: "0123456789abcdef".repeat(4),
            locale: "en".to_string(),
        })
    }

    /// A player as the remote API would send it.
    pub fn player_fixture(id: i64, active: bool) -> Player {
        serde_json::from_value(json!({
            "id": id,
            "name": format!("Player {id}"),
            "active": if active { 1 } else { 0 },
            "goals": id * 10,
        }))
        .unwrap()
    }

    pub fn assert_handler_success(result: Result<(), ApplicationError>) {
        assert!(
            result.is_ok(),
            "Handler should execute successfully: {:?}",
            result.err().unwrap().to_string()
        )
    }
}
