use crate::{error::StorageError, store::QuoteStore};

pub const EMPTY_STORE_GUIDANCE: &str =
    "No quotes yet. Run `random-quotes migrate` and then `random-quotes seed-quotes` to fill the database.";

/// What the home page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayQuote {
    pub text: String,
    pub author: Option<String>,
}

#[tracing::instrument(skip_all)]
pub async fn pick_quote(store: &QuoteStore) -> Result<DisplayQuote, StorageError> {
    let quote = match store.pick_random().await? {
        Some(quote) => DisplayQuote {
            text: quote.text,
            author: quote.author,
        },
        None => {
            tracing::warn!("no quotes in the database, showing setup guidance");

            DisplayQuote {
                text: EMPTY_STORE_GUIDANCE.to_string(),
                author: None,
            }
        }
    };

    Ok(quote)
}
