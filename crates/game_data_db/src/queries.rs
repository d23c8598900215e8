//! Statement builders for the three catalog operations.
//!
//! Every value reaches the database as a bind parameter. The builders are
//! public so callers can inspect the generated SQL with
//! [`diesel::debug_query`] without a live connection.

use diesel::dsl;
use diesel::prelude::*;
use diesel::query_builder::InsertStatement;

use crate::models::{Game, NewGame};
use crate::schema::{game_inserts, games};

/// Builds the insert for one game, binding all five columns in table order.
/// Missing fields are bound as NULL.
pub fn insert_game<'a>(
    new_game: &'a NewGame,
) -> InsertStatement<game_inserts::table, <&'a NewGame as Insertable<game_inserts::table>>::Values>
{
    diesel::insert_into(game_inserts::table).values(new_game)
}

/// Builds an unfiltered, unordered select of every game.
pub fn select_all_games() -> dsl::Select<games::table, dsl::AsSelect<Game, diesel::mysql::Mysql>> {
    games::table.select(Game::as_select())
}

/// Builds a select of the games whose id equals `id`, bound as a parameter.
pub fn select_games_by_id(
    id: i32,
) -> dsl::Select<
    dsl::Filter<games::table, dsl::Eq<games::id, i32>>,
    dsl::AsSelect<Game, diesel::mysql::Mysql>,
> {
    games::table
        .filter(games::id.eq(id))
        .select(Game::as_select())
}
