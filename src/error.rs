use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service answered {0}")]
    Rejected(StatusCode),

    #[error("no wikidata code in page url: {0}")]
    MissingWikidata(String),
}
