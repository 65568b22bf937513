use std::sync::Arc;

use playerdesk_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    repository::PlayerRepository,
};

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself: it owns the single
/// injected `PlayerRepository` and dispatches Commands and Queries to
/// their respective handlers.
pub struct AppBus {
    config: Arc<Config>,
    players: Arc<dyn PlayerRepository>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, players: Arc<dyn PlayerRepository>) -> Self {
        Self { config, players }
    }

    /// Executes a command.
    /// A command is an operation that modifies state on the remote API.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<(), ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let result = handler.handle(cmd, &self.players, &self.config).await;
        if let Err(e) = &result {
            tracing::debug!("Command failed: {e}");
        }
        result
    }

    /// Executes a query.
    /// A query reads from the remote API and returns data.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let result = handler.handle(query, &self.players, &self.config).await;
        if let Err(e) = &result {
            tracing::debug!("Query failed: {e}");
        }
        result
    }
}
