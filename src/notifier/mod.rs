pub mod errors;
pub mod smtp;

use crate::data_models::StockAlert;
use crate::notifier::errors::NotifierError;

pub use smtp::SmtpNotifier;

pub const SUBJECT: &str = "STOCKWATCH | IN STOCK!";
const SIGNATURE: &str = "- Sent using stockwatch";

pub trait Notifier {
    fn notify(&self, alert: &StockAlert) -> Result<(), NotifierError>;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, alert: &StockAlert) -> Result<(), NotifierError> {
        (**self).notify(alert)
    }
}

pub fn compose_body(alert: &StockAlert) -> String {
    format!(
        "Url: {}\n\nTitle: {}\nPrice: {}\nLimit: {}\nTotal: {}\n\n\n\n\n{}",
        alert.url, alert.title, alert.price, alert.limit, alert.stock, SIGNATURE
    )
}
