use async_trait::async_trait;
use playerdesk_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, repository::PlayerRepository};

/// A marker trait for Command structs.
/// Commands are operations that change the state held by the remote API.
pub trait Command: Send + Sync {}

/// A trait for handlers that execute Commands.
/// It receives the command and the injected player repository to use.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        players: &Arc<dyn PlayerRepository>,
        config: &Arc<Config>,
    ) -> Result<(), ApplicationError>;
}
