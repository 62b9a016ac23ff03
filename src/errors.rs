use crate::notifier::errors::NotifierError;
use crate::parser::errors::ParserError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load configuration: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    #[error(transparent)]
    AppErrors(#[from] AppErrors),
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("failed to read settings document: {0}")]
    Load(#[from] config::ConfigError),
    #[error("unknown reject policy `{0}`, use either `abort` or `skip`")]
    UnknownRejectPolicy(String),
}

#[derive(Error, Debug)]
pub enum AppErrors {
    #[error("failed parsing with: {0}")]
    ParserError(#[from] ParserError),
    #[error("failed notifying with: {0}")]
    NotifierError(#[from] NotifierError),
}
