mod get_player_by_id;
mod list_players;

pub use get_player_by_id::GetPlayerByIdHandler;
pub use list_players::ListPlayersHandler;
