use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("failed to build reqwest client: {0}")]
    FailedClient(reqwest::Error),
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("failed to decode product payload: {0}")]
    DecodeError(#[from] serde_json::Error),
    #[error("url parsing error {0}")]
    UrlParsingError(#[from] url::ParseError),
}
