//! Game Data Service - HTTP JSON front end for the game catalog.
//!
//! # Architecture
//!
//! - **Routes**: axum router mapping each endpoint to one store operation
//! - **Config**: defaults, TOML file, environment, then CLI flags
//! - **Errors**: every store failure becomes a 500 `{"error": ...}` body
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use game_data_db::MysqlGameStore;
//! use game_data_server::{AppState, ServiceConfig, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServiceConfig::load(None)?;
//! let store = MysqlGameStore::connect(&config.database().connection_url()?)?;
//! let app = router(
//!     AppState::new(Arc::new(store), *config.server().expose_db_errors()),
//!     config.server().route_prefix(),
//! );
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod routes;

pub use cli::Cli;
pub use config::{ConfigError, DatabaseConfig, ServerConfig, ServiceConfig, normalize_prefix};
pub use error::{ApiError, ErrorBody, GENERIC_DB_ERROR};
pub use routes::{AppState, GAME_ADDED, MessageBody, WELCOME_TEXT, router};
