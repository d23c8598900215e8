//! MySQL-backed game store over a single shared connection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use diesel::mysql::MysqlConnection;
use diesel::prelude::*;
use tracing::{debug, info, instrument};

use crate::{DbError, Game, GameStore, NewGame, insert_game, select_all_games, select_games_by_id};

/// Game store holding one long-lived MySQL connection.
///
/// Statements run on tokio's blocking pool and take the connection mutex for
/// their duration, so concurrent requests are serialized on the one handle.
/// There is no reconnect: once the connection is lost every statement fails.
#[derive(Clone)]
pub struct MysqlGameStore {
    conn: Arc<Mutex<MysqlConnection>>,
}

impl std::fmt::Debug for MysqlGameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MysqlGameStore").finish_non_exhaustive()
    }
}

impl MysqlGameStore {
    /// Establishes the connection described by `database_url`.
    ///
    /// The URL may carry a password, so it is never logged.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection cannot be established.
    #[instrument(skip(database_url))]
    pub fn connect(database_url: &str) -> Result<Self, DbError> {
        debug!("Establishing database connection");
        let conn = MysqlConnection::establish(database_url)?;
        info!("Database connection established");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Releases the connection.
    ///
    /// Clones share the handle; the connection closes once the last one is
    /// released.
    #[instrument(skip(self))]
    pub fn close(self) {
        let last = Arc::strong_count(&self.conn) == 1;
        drop(self);
        if last {
            info!("Database connection closed");
        } else {
            debug!("Store handle released, connection still shared");
        }
    }

    /// Runs `op` against the shared connection on a blocking thread.
    async fn run<T, F>(&self, op: F) -> Result<T, DbError>
    where
        T: Send + 'static,
        F: FnOnce(&mut MysqlConnection) -> QueryResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn
                .lock()
                .map_err(|_| DbError::new("Database connection lock poisoned"))?;
            op(&mut *conn).map_err(DbError::from)
        })
        .await
        .map_err(|e| DbError::new(format!("Database task failed: {}", e)))?
    }
}

#[async_trait]
impl GameStore for MysqlGameStore {
    #[instrument(skip(self, new_game), fields(name = ?new_game.name()))]
    async fn create_game(&self, new_game: NewGame) -> Result<(), DbError> {
        debug!("Inserting game");
        let rows = self
            .run(move |conn| insert_game(&new_game).execute(conn))
            .await?;
        info!(rows, "Game inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_games(&self) -> Result<Vec<Game>, DbError> {
        debug!("Loading all games");
        let games = self
            .run(|conn| select_all_games().load::<Game>(conn))
            .await?;
        info!(count = games.len(), "Games loaded");
        Ok(games)
    }

    #[instrument(skip(self))]
    async fn games_by_id(&self, id: i32) -> Result<Vec<Game>, DbError> {
        debug!(id, "Loading games by id");
        let games = self
            .run(move |conn| select_games_by_id(id).load::<Game>(conn))
            .await?;
        info!(id, count = games.len(), "Games loaded by id");
        Ok(games)
    }
}
