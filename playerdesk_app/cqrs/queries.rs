use playerdesk_types::player::Player;

use crate::cqrs::Query;

#[derive(Debug, Clone)]
pub struct ListPlayers;

impl Query for ListPlayers {
    type Output = Vec<Player>;
}

/// Looks a player up by the raw id taken from the request path.
#[derive(Debug, Clone)]
pub struct GetPlayerById {
    pub id: String,
}

impl Query for GetPlayerById {
    type Output = Player;
}
