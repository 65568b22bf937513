use async_trait::async_trait;
use playerdesk_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, repository::PlayerRepository};

/// A marker trait for Query structs.
/// Queries are operations that only read from the remote API.
pub trait Query: Send + Sync {
    /// The data type that this query will return.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Queries.
#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        players: &Arc<dyn PlayerRepository>,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}
