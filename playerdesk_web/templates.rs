use askama::Template;
use serde_json::Value;

use playerdesk_types::player::Player;

use crate::{forms::PlayerForm, handlers::Flash, routes};

/// Data every page shares through `layout.html`.
#[derive(Debug, Default, Clone)]
pub struct TemplateLayout {
    pub nav_active: &'static str,
    pub flashes: Vec<Flash>,
}

impl TemplateLayout {
    pub fn new(nav_active: &'static str, flashes: Vec<Flash>) -> Self {
        Self {
            nav_active,
            flashes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AttributeView {
    pub name: String,
    pub value: String,
}

/// One line of the players table.
#[derive(Debug, Clone)]
pub struct PlayerRow {
    pub id: String,
    pub active: bool,
    pub attributes: Vec<AttributeView>,
    pub edit_path: String,
    pub delete_path: String,
}

impl From<&Player> for PlayerRow {
    fn from(player: &Player) -> Self {
        let id = player.id.to_string();
        PlayerRow {
            edit_path: routes::player_edit(&id),
            delete_path: routes::player_delete(&id),
            active: player.active,
            attributes: player
                .attributes
                .iter()
                .map(|(name, value)| AttributeView {
                    name: name.clone(),
                    value: match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    },
                })
                .collect(),
            id,
        }
    }
}

/// Template for the players list.
#[derive(Debug, Template)]
#[template(path = "players.html")]
pub struct PlayersTemplate {
    pub layout: TemplateLayout,
    pub csrf_token: String,
    pub players: Vec<PlayerRow>,
}

/// Template for the edit form of a single player.
#[derive(Debug, Template)]
#[template(path = "player_edit.html")]
pub struct PlayerEditTemplate {
    pub layout: TemplateLayout,
    pub csrf_token: String,
    pub player_id: String,
    pub form: PlayerForm,
    pub edit_path: String,
    pub delete_path: String,
    pub list_path: String,
}

impl PlayerEditTemplate {
    /// `id` is the raw path segment the form was requested with.
    pub fn new(layout: TemplateLayout, csrf_token: String, id: &str, form: PlayerForm) -> Self {
        Self {
            layout,
            csrf_token,
            player_id: form.id().to_string(),
            edit_path: routes::player_edit(id),
            delete_path: routes::player_delete(id),
            list_path: routes::players(),
            form,
        }
    }
}

/// Template for requests that cannot be served.
#[derive(Debug, Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub layout: TemplateLayout,
    pub title: String,
    pub message: String,
}
