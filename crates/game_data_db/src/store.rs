//! Storage abstraction used by request handlers.

use async_trait::async_trait;

use crate::{DbError, Game, NewGame};

/// Catalog operations, one SQL statement each.
///
/// Handlers hold an `Arc<dyn GameStore>` so the backing connection is chosen
/// by the process entry point, and tests can supply an in-memory double.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Inserts one game. The generated id is not reported back.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the insert fails for any reason.
    async fn create_game(&self, new_game: NewGame) -> Result<(), DbError>;

    /// Returns every game in whatever order the database yields them.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the select fails.
    async fn list_games(&self) -> Result<Vec<Game>, DbError>;

    /// Returns all games whose id equals `id`. An empty vector means no match.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the select fails.
    async fn games_by_id(&self, id: i32) -> Result<Vec<Game>, DbError>;
}
