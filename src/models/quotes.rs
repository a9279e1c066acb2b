#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Quote {
    pub id: i64,
    pub text: String,
    pub author: Option<String>,
}

/// A quote waiting to be inserted. `id: None` lets sqlite assign the rowid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewQuote {
    pub id: Option<i64>,
    pub text: String,
    pub author: Option<String>,
}

impl NewQuote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            author: Some(author.into()),
        }
    }
}
