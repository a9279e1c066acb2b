//! A small web service that shows a random quotation on every page view.
//!
//! Quotes live in a single sqlite table. The `seed-quotes` command fills it
//! once, either from the built-in samples or from a CSV file, and the home page
//! picks one row in random order per request.

use std::sync::Arc;

pub mod config;
pub mod constants;
pub mod error;
pub mod init;
pub mod models;
pub mod picker;
pub mod routes;
pub mod seeder;
pub mod store;
pub mod telemetry;
pub mod templates;

use config::Config;
use store::QuoteStore;

/// Shared state handed to every handler and command.
#[derive(Clone)]
pub struct Data {
    pub config: Arc<Config>,
    pub store: QuoteStore,
}
