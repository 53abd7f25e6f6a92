//! Session configuration.

use std::time::Duration;

/// Default "typing" delay before a reply appears.
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(1200);
/// Default delay between a fallback reply and the follow-up action.
pub const DEFAULT_ACTION_DELAY: Duration = Duration::from_millis(500);

const DEFAULT_GREETING: &str = "Assalamu’alaikum. Saya AI Concierge Al-Haramain. Ada yang bisa saya bantu? (Tanya soal Lokasi, Harga, atau Visa)";
const DEFAULT_ACTION_PROMPT: &str = "Klik tombol di bawah untuk chat langsung:";

/// Where handoff links point to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContactConfig {
    /// Messaging domain, without a trailing slash.
    pub base_url: String,
    /// Recipient id appended to the base URL.
    pub phone: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wa.me".to_owned(),
            phone: "6289517634196".to_owned(),
        }
    }
}

/// Builder for [`ConciergeConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConciergeConfigBuilder {
    typing_delay: Option<Duration>,
    action_delay: Option<Duration>,
    greeting: Option<String>,
    action_prompt: Option<String>,
    contact: Option<ContactConfig>,
}

impl ConciergeConfigBuilder {
    /// Sets how long the concierge "types" before each reply.
    #[inline]
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = Some(delay);
        self
    }

    /// Sets the delay between a fallback reply and the action message.
    #[inline]
    pub fn with_action_delay(mut self, delay: Duration) -> Self {
        self.action_delay = Some(delay);
        self
    }

    /// Sets the first message of every session.
    #[inline]
    pub fn with_greeting<S: Into<String>>(mut self, greeting: S) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    /// Sets the text of the action message.
    #[inline]
    pub fn with_action_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.action_prompt = Some(prompt.into());
        self
    }

    /// Sets the handoff destination.
    #[inline]
    pub fn with_contact(mut self, contact: ContactConfig) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Overrides only the recipient of the handoff destination.
    #[inline]
    pub fn with_phone<S: Into<String>>(mut self, phone: S) -> Self {
        let mut contact = self.contact.take().unwrap_or_default();
        contact.phone = phone.into();
        self.contact = Some(contact);
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> ConciergeConfig {
        ConciergeConfig {
            typing_delay: self.typing_delay.unwrap_or(DEFAULT_TYPING_DELAY),
            action_delay: self.action_delay.unwrap_or(DEFAULT_ACTION_DELAY),
            greeting: self
                .greeting
                .unwrap_or_else(|| DEFAULT_GREETING.to_owned()),
            action_prompt: self
                .action_prompt
                .unwrap_or_else(|| DEFAULT_ACTION_PROMPT.to_owned()),
            contact: self.contact.unwrap_or_default(),
        }
    }
}

/// Configuration of a concierge session.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConciergeConfig {
    pub(crate) typing_delay: Duration,
    pub(crate) action_delay: Duration,
    pub(crate) greeting: String,
    pub(crate) action_prompt: String,
    pub(crate) contact: ContactConfig,
}

impl ConciergeConfig {
    /// Creates an empty builder.
    #[inline]
    pub fn builder() -> ConciergeConfigBuilder {
        ConciergeConfigBuilder::default()
    }

    /// Returns the handoff destination.
    #[inline]
    pub fn contact(&self) -> &ContactConfig {
        &self.contact
    }

    /// Returns the typing delay.
    #[inline]
    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }

    /// Returns the action delay.
    #[inline]
    pub fn action_delay(&self) -> Duration {
        self.action_delay
    }
}

impl Default for ConciergeConfig {
    #[inline]
    fn default() -> Self {
        ConciergeConfigBuilder::default().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConciergeConfig::default();
        assert_eq!(config.typing_delay(), Duration::from_millis(1200));
        assert_eq!(config.action_delay(), Duration::from_millis(500));
        assert_eq!(config.contact().base_url, "https://wa.me");
        assert_eq!(config.contact().phone, "6289517634196");
    }

    #[test]
    fn test_phone_override_keeps_base_url() {
        let config = ConciergeConfig::builder()
            .with_phone("620000")
            .with_typing_delay(Duration::ZERO)
            .build();
        assert_eq!(config.contact().base_url, "https://wa.me");
        assert_eq!(config.contact().phone, "620000");
        assert_eq!(config.typing_delay(), Duration::ZERO);
    }
}
