pub mod configuration;
pub mod data_models;
pub mod errors;
pub mod notifier;
pub mod parser;
pub mod watcher;

use crate::configuration::Settings;
use crate::errors::AppErrors;
use crate::notifier::SmtpNotifier;
use crate::parser::ProductParser;
use crate::watcher::{RunReport, Watcher};

/// Checks every watched item once against the live product API and mails
/// alerts over SMTP.
pub fn run(settings: &Settings) -> Result<RunReport, AppErrors> {
    let parser = ProductParser::new(&settings.api)?;
    let notifier = SmtpNotifier::new(&settings.email)?;
    Ok(Watcher::new(settings, parser, notifier).run())
}
