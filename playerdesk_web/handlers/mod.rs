mod flash;
mod helpers;
mod home_handler;
mod player_handler;

pub use flash::{Flash, FlashLevel, push_flash, take_flashes};
pub use helpers::*;
pub use home_handler::home;
pub use player_handler::{delete_player, edit_player, list_players, update_player};
