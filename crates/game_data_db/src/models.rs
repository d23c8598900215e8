//! Database models for the `games` table.

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema;

/// A persisted game record.
///
/// Serializes with the column names as keys and `released_date` as a
/// `YYYY-MM-DD` string.
#[derive(
    Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize, Deserialize, Getters, new,
)]
#[diesel(table_name = schema::games)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Game {
    id: i32,
    name: String,
    category: String,
    released_date: NaiveDate,
    price: f64,
    image_url: String,
}

/// Insertable game payload, as accepted from clients.
///
/// Every field is optional and nothing is validated here. An absent or `null`
/// field is bound as NULL, and `released_date` is passed through as the
/// client's string, leaving enforcement to the table's own constraints.
#[derive(Debug, Clone, Default, PartialEq, Insertable, Serialize, Deserialize, Getters, new)]
#[diesel(table_name = schema::game_inserts)]
#[diesel(treat_none_as_null = true)]
#[serde(default)]
pub struct NewGame {
    name: Option<String>,
    category: Option<String>,
    released_date: Option<String>,
    price: Option<f64>,
    image_url: Option<String>,
}
