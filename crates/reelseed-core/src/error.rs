use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("config error: {0}")]
    Config(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("upsert {table} failed: {source}")]
    Upsert {
        table: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Render `err` with its whole `source()` chain, joined by `: `.
///
/// Causes whose text already appears in the message so far are skipped, since
/// wrapping errors usually embed their direct source.
pub fn report(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(source) = cause {
        let text = source.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = source.source();
    }
    message
}
