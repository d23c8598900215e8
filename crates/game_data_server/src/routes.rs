//! HTTP routes for the game catalog.
//!
//! | Method | Path                  | Success                         |
//! |--------|-----------------------|---------------------------------|
//! | GET    | `{prefix}/`           | 200, welcome text               |
//! | POST   | `{prefix}/games`      | 201, `{"message":"Game added"}` |
//! | GET    | `{prefix}/games`      | 200, array of games             |
//! | GET    | `{prefix}/game/{id}`  | 200, array of matching games    |
//!
//! Every data route answers a store failure with 500 `{"error": ...}`.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

use game_data_db::{Game, GameStore, NewGame};

use crate::config::normalize_prefix;
use crate::error::ApiError;

/// Body of `GET {prefix}/`.
pub const WELCOME_TEXT: &str = "Welcome to the Game Data Service";

/// Confirmation sent after a successful insert.
pub const GAME_ADDED: &str = "Game added";

/// JSON body of a confirmation response: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Confirmation text.
    pub message: String,
}

/// Shared handler state.
#[derive(Clone, new)]
pub struct AppState {
    /// Store every handler runs its statement against.
    store: Arc<dyn GameStore>,
    /// Whether 500 bodies carry the raw database message.
    expose_db_errors: bool,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("expose_db_errors", &self.expose_db_errors)
            .finish_non_exhaustive()
    }
}

/// Builds the catalog router with every route mounted under `route_prefix`.
#[instrument(skip(state))]
pub fn router(state: AppState, route_prefix: &str) -> Router {
    let prefix = normalize_prefix(route_prefix);
    info!(prefix = %prefix, "Mounting catalog routes");

    let mut app = Router::new()
        .route(&format!("{}/", prefix), get(welcome))
        .route(&format!("{}/games", prefix), get(list_games).post(create_game))
        .route(&format!("{}/game/{{id}}", prefix), get(game_by_id));

    if !prefix.is_empty() {
        app = app.route(&prefix, get(welcome));
    }

    app.with_state(state)
        .layer(ServiceBuilder::new().map_request(log_request))
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

async fn welcome() -> &'static str {
    WELCOME_TEXT
}

#[instrument(skip_all)]
async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<NewGame>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let Json(new_game) = payload?;
    debug!(name = ?new_game.name(), "Creating game");

    state
        .store
        .create_game(new_game)
        .await
        .map_err(|e| ApiError::database(e, state.expose_db_errors))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: GAME_ADDED.to_string(),
        }),
    ))
}

#[instrument(skip_all)]
async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<Game>>, ApiError> {
    let games = state
        .store
        .list_games()
        .await
        .map_err(|e| ApiError::database(e, state.expose_db_errors))?;
    debug!(count = games.len(), "Listing games");
    Ok(Json(games))
}

#[instrument(skip_all)]
async fn game_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let Path(id) = id?;
    let games = state
        .store
        .games_by_id(id)
        .await
        .map_err(|e| ApiError::database(e, state.expose_db_errors))?;
    debug!(id, count = games.len(), "Looked up game by id");
    Ok(Json(games))
}
