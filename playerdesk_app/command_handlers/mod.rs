mod delete_player;
mod update_player;

pub use delete_player::DeletePlayerCommandHandler;
pub use update_player::UpdatePlayerCommandHandler;

/// The remote API only reports success with a plain 200.
const REMOTE_SUCCESS: u16 = 200;
