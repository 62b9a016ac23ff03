use crate::errors::ConfigurationError;
use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const CONFIGURATION_PATH: &str = "./config.json";
pub const DEFAULT_API_URL: &str = "https://www.newegg.com/product/api/ProductRealtime";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub email: EmailSettings,
    /// Item numbers to watch, checked in this order.
    pub items: Vec<String>,
    pub limits: Limits,
    pub api: ApiSettings,
    #[serde_as(as = "DisplayFromStr")]
    pub on_reject: RejectPolicy,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct EmailSettings {
    pub receiver: Receiver,
    pub sender: Sender,
    pub smtp: SmtpSettings,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Receiver {
    pub address: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Sender {
    pub address: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Limits {
    pub price: PriceLimits,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PriceLimits {
    pub min: i64,
    pub max: i64,
}

impl PriceLimits {
    pub fn contains(&self, price: i64) -> bool {
        self.min <= price && price <= self.max
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    pub url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// What the watch loop does after an item is not found or priced out of range.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum RejectPolicy {
    /// Stop checking the remaining items.
    #[default]
    Abort,
    /// Move on to the next item.
    Skip,
}

impl Display for RejectPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectPolicy::Abort => write!(f, "abort"),
            RejectPolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for RejectPolicy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(RejectPolicy::Abort),
            "skip" => Ok(RejectPolicy::Skip),
            other => Err(ConfigurationError::UnknownRejectPolicy(other.to_string())),
        }
    }
}

impl Settings {
    pub fn from_json(document: &str) -> Result<Self, ConfigurationError> {
        let settings = Config::builder()
            .add_source(config::File::from_str(document, FileFormat::Json))
            .build()?;
        Ok(settings.try_deserialize::<Settings>()?)
    }
}

pub fn load_configuration(path: &str) -> Result<Settings, ConfigurationError> {
    let settings = Config::builder()
        .add_source(config::File::new(path, FileFormat::Json).required(true))
        .build()?;
    Ok(settings.try_deserialize::<Settings>()?)
}

pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    load_configuration(CONFIGURATION_PATH)
}
