use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("invalid email address: {0}")]
    AddressError(#[from] lettre::address::AddressError),
    #[error("failed to build email: {0}")]
    MessageError(#[from] lettre::error::Error),
    #[error("email smtp error: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),
}
