use thiserror::Error;

/// Errors raised at the edges of the engine: word capture, table loading and
/// configuration. Lemmatizing and matching themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("selection is empty")]
    EmptySelection,

    #[error("`{0}` is not an English word")]
    NotAWord(String),

    #[error("invalid {table} table: {source}")]
    Table {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
