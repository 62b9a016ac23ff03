use crate::configuration::EmailSettings;
use crate::data_models::StockAlert;
use crate::notifier::errors::NotifierError;
use crate::notifier::{compose_body, Notifier, SUBJECT};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

/// Mails alerts through an authenticated STARTTLS submission server.
pub struct SmtpNotifier {
    sender: String,
    receivers: Vec<String>,
    transport: SmtpTransport,
}

impl SmtpNotifier {
    pub fn new(settings: &EmailSettings) -> Result<Self, NotifierError> {
        let credentials = Credentials::new(
            settings.sender.address.clone(),
            settings.sender.password.clone(),
        );
        let transport = SmtpTransport::starttls_relay(&settings.smtp.host)?
            .port(settings.smtp.port)
            .credentials(credentials)
            .build();
        Ok(Self {
            sender: settings.sender.address.clone(),
            receivers: settings.receiver.address.clone(),
            transport,
        })
    }

    pub fn build_message(&self, alert: &StockAlert) -> Result<Message, NotifierError> {
        let mut builder = Message::builder()
            .from(self.sender.parse::<Mailbox>()?)
            .subject(SUBJECT)
            .header(ContentType::TEXT_PLAIN);
        for receiver in &self.receivers {
            builder = builder.to(receiver.parse::<Mailbox>()?);
        }
        Ok(builder.body(compose_body(alert))?)
    }
}

impl Notifier for SmtpNotifier {
    fn notify(&self, alert: &StockAlert) -> Result<(), NotifierError> {
        let message = self.build_message(alert)?;
        self.transport.send(&message)?;
        info!(to = %self.receivers.join(", "), "email successfully sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{Receiver, Sender};

    fn create_notifier(receivers: &[&str]) -> SmtpNotifier {
        let settings = EmailSettings {
            receiver: Receiver {
                address: receivers.iter().map(|r| r.to_string()).collect(),
            },
            sender: Sender {
                address: "watcher@example.com".to_string(),
                password: "secret".to_string(),
            },
            ..Default::default()
        };
        SmtpNotifier::new(&settings).expect("Failed to create notifier")
    }

    #[test]
    fn build_message_works() {
        let notifier = create_notifier(&["one@example.com", "two@example.com"]);
        let message = notifier
            .build_message(&StockAlert::dummy())
            .expect("Failed to build message");
        let envelope = message.envelope();
        assert_eq!(envelope.to().len(), 2);
        assert_eq!(
            envelope.from().map(|from| from.to_string()),
            Some("watcher@example.com".to_string())
        );
        let formatted = String::from_utf8(message.formatted()).expect("Not utf-8");
        assert!(formatted.contains("Subject: STOCKWATCH | IN STOCK!"));
        assert!(formatted.contains("Price: 19.99"));
    }

    #[test]
    fn build_message_without_receivers_fails() {
        let notifier = create_notifier(&[]);
        assert!(matches!(
            notifier.build_message(&StockAlert::dummy()),
            Err(NotifierError::MessageError(_))
        ));
    }

    #[test]
    fn build_message_with_bad_receiver_fails() {
        let notifier = create_notifier(&["not an address"]);
        assert!(matches!(
            notifier.build_message(&StockAlert::dummy()),
            Err(NotifierError::AddressError(_))
        ));
    }
}
