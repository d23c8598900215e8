//! Persistence layer for the game data catalog.
//!
//! Everything the HTTP layer needs from the database goes through the
//! [`GameStore`] trait. Production code uses [`MysqlGameStore`], which owns a
//! single long-lived MySQL connection; tests substitute an in-memory store.
//!
//! # Example
//!
//! ```no_run
//! use game_data_db::{GameStore, MysqlGameStore};
//!
//! # async fn example() -> Result<(), game_data_db::DbError> {
//! let store = MysqlGameStore::connect("mysql://root@localhost:3306/gamedb")?;
//! let games = store.list_games().await?;
//! println!("{} games in catalog", games.len());
//! store.close();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod models;
mod mysql_store;
mod queries;
mod schema; // Diesel table definition - internal use only
mod store;

pub use error::DbError;
pub use models::{Game, NewGame};
pub use mysql_store::MysqlGameStore;
pub use queries::{insert_game, select_all_games, select_games_by_id};
pub use store::GameStore;
