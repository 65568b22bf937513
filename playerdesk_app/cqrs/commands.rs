use playerdesk_types::player::Player;

use crate::cqrs::Command;

/// Sends an edited record to `POST /api/players/update/{id}`.
#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub id: String,
    pub player: Player,
}

impl Command for UpdatePlayer {}

/// Calls `DELETE /api/players/destroy/{id}`.
#[derive(Debug, Clone)]
pub struct DeletePlayer {
    pub id: String,
}

impl Command for DeletePlayer {}
