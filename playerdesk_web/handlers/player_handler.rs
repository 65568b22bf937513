use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;
use rust_i18n::t;

use playerdesk_app::{
    command_handlers::{DeletePlayerCommandHandler, UpdatePlayerCommandHandler},
    cqrs::{
        commands::{DeletePlayer, UpdatePlayer},
        queries::{GetPlayerById, ListPlayers},
    },
    queries_handlers::{GetPlayerByIdHandler, ListPlayersHandler},
};
use playerdesk_types::{errors::ApplicationError, player::Player};

use crate::{
    forms::{PlayerForm, PlayerSubmission},
    handlers::{
        CsrfForm, CsrfGuard, Flash, error_response, generate_csrf, push_flash,
        render_template, take_flashes,
    },
    http::AppState,
    routes,
    templates::{PlayerEditTemplate, PlayerRow, PlayersTemplate, TemplateLayout},
};

const NAV_PLAYERS: &str = "players";

/// GET /players – Show every player the remote API knows about.
pub async fn list_players(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let players = match state
        .app_bus
        .query(ListPlayers, ListPlayersHandler::new())
        .await
    {
        Ok(players) => players,
        Err(e) => return error_response(&e),
    };

    let (jar, csrf_token) = generate_csrf(jar);
    let (jar, flashes) = take_flashes(jar);

    let template = PlayersTemplate {
        layout: TemplateLayout::new(NAV_PLAYERS, flashes),
        csrf_token,
        players: players.iter().map(PlayerRow::from).collect(),
    };
    (jar, render_template(template, None)).into_response()
}

/// GET /player/{id} – Show the edit form of a player.
pub async fn edit_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: SignedCookieJar,
) -> Response {
    let player = match find_player(&state, &id).await {
        Ok(player) => player,
        Err(e) => return error_response(&e),
    };

    let (jar, csrf_token) = generate_csrf(jar);
    let (jar, flashes) = take_flashes(jar);

    let template = PlayerEditTemplate::new(
        TemplateLayout::new(NAV_PLAYERS, flashes),
        csrf_token,
        &id,
        PlayerForm::bind(player),
    );
    (jar, render_template(template, None)).into_response()
}

/// POST /player/{id} – Validate the edit form and push the record to the remote API.
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    CsrfForm {
        jar,
        form: submission,
    }: CsrfForm<PlayerSubmission>,
) -> Response {
    let player = match find_player(&state, &id).await {
        Ok(player) => player,
        Err(e) => return error_response(&e),
    };

    let player = match PlayerForm::bind(player).submit(&submission) {
        Ok(player) => player,
        Err(form) => {
            tracing::info!(player_id = %id, "Player form rejected");
            let (jar, csrf_token) = generate_csrf(jar);
            let template = PlayerEditTemplate::new(
                TemplateLayout::new(NAV_PLAYERS, vec![Flash::error(t!("flash.form_invalid"))]),
                csrf_token,
                &id,
                form,
            );
            return (
                jar,
                render_template(template, Some(StatusCode::UNPROCESSABLE_ENTITY)),
            )
                .into_response();
        }
    };

    let command = UpdatePlayer {
        id: id.clone(),
        player,
    };
    match state
        .app_bus
        .execute(command, UpdatePlayerCommandHandler::new())
        .await
    {
        Ok(()) => {
            let jar = push_flash(jar, Flash::success(t!("flash.player_updated")));
            (jar, Redirect::to(&routes::players())).into_response()
        }
        Err(e) => {
            tracing::warn!(player_id = %id, "Player update failed: {e}");
            let jar = push_flash(jar, Flash::error(t!("flash.player_update_failed")));
            (jar, Redirect::to(&routes::player_edit(&id))).into_response()
        }
    }
}

/// DELETE /players/{id}/delete – Ask the remote API to drop a player.
///
/// Whatever the outcome, the user lands back on the list. The CSRF token
/// comes from the delete form or from the `X-CSRF-Token` header.
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    CsrfGuard { jar }: CsrfGuard,
) -> Response {
    let command = DeletePlayer { id: id.clone() };

    let flash = match state
        .app_bus
        .execute(command, DeletePlayerCommandHandler::new())
        .await
    {
        Ok(()) => Flash::success(t!("flash.player_deleted")),
        Err(e) => {
            tracing::warn!(player_id = %id, "Player deletion failed: {e}");
            Flash::error(t!("flash.player_delete_failed"))
        }
    };

    let jar = push_flash(jar, flash);
    (jar, Redirect::to(&routes::players())).into_response()
}

async fn find_player(state: &AppState, id: &str) -> Result<Player, ApplicationError> {
    state
        .app_bus
        .query(
            GetPlayerById { id: id.to_string() },
            GetPlayerByIdHandler::new(),
        )
        .await
}
