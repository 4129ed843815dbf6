use crate::foundation::error::{ScrollyteError, ScrollyteResult};

/// Environment variable holding the delivery service id.
pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
/// Environment variable holding the delivery template id.
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
/// Environment variable holding the delivery public key.
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";

/// The three identifiers addressing the external send channel.
///
/// An empty string counts as missing; [`MailerConfig::validate`] is the
/// fail-fast check run before any send is attempted.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MailerConfig {
    /// Delivery service id.
    pub service_id: String,
    /// Message template id.
    pub template_id: String,
    /// Public API key.
    pub public_key: String,
}

impl MailerConfig {
    /// Read the configuration from the environment. Unset variables read as
    /// empty strings; validation is deferred to submission so a page without
    /// a contact form never fails at startup.
    pub fn from_env() -> Self {
        Self {
            service_id: std::env::var(ENV_SERVICE_ID).unwrap_or_default(),
            template_id: std::env::var(ENV_TEMPLATE_ID).unwrap_or_default(),
            public_key: std::env::var(ENV_PUBLIC_KEY).unwrap_or_default(),
        }
    }

    /// Fail fast when any identifier is absent.
    pub fn validate(&self) -> ScrollyteResult<()> {
        if self.service_id.is_empty() || self.template_id.is_empty() || self.public_key.is_empty()
        {
            return Err(ScrollyteError::config(
                "delivery configuration is missing: service id, template id and public key are all required",
            ));
        }
        Ok(())
    }
}

/// A collected contact message ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// External delivery boundary. The engine never talks to the network itself;
/// the host supplies an implementation.
pub trait Mailer {
    /// Deliver `message` through the channel addressed by `config`.
    fn send(&self, config: &MailerConfig, message: &ContactMessage) -> ScrollyteResult<()>;
}
