//! Settings read from the environment.
//!
//! | variable | meaning |
//! |---|---|
//! | `CONCIERGE_PHONE` | recipient of handoff links |
//! | `CONCIERGE_TYPING_DELAY_MS` | typing delay in milliseconds |
//! | `CONCIERGE_RULES` | path to a JSON rule file |

use std::env;
use std::error::Error;
use std::fmt::{self, Display};
use std::path::PathBuf;
use std::time::Duration;

use concierge_core::ConciergeConfig;

/// Environment variable naming the handoff recipient.
pub const PHONE_VAR: &str = "CONCIERGE_PHONE";
/// Environment variable holding the typing delay in milliseconds.
pub const TYPING_DELAY_VAR: &str = "CONCIERGE_TYPING_DELAY_MS";
/// Environment variable pointing at a JSON rule file.
pub const RULES_VAR: &str = "CONCIERGE_RULES";

/// Returned when a variable is set to something unusable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsError {
    var: &'static str,
    value: String,
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.var, self.value)
    }
}

impl Error for SettingsError {}

/// Resolved settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Session configuration.
    pub config: ConciergeConfig,
    /// Rule file replacing the built-in rules.
    pub rules_path: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from the process environment.
    #[inline]
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Reads settings through `lookup`, which returns the value of a
    /// variable if it is set. Unset and empty variables keep defaults.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let mut builder = ConciergeConfig::builder();
        if let Some(phone) = get(PHONE_VAR) {
            let phone = phone.trim();
            if !phone.chars().all(|ch| ch.is_ascii_digit()) {
                return Err(SettingsError {
                    var: PHONE_VAR,
                    value: phone.to_owned(),
                });
            }
            builder = builder.with_phone(phone);
        }
        if let Some(delay) = get(TYPING_DELAY_VAR) {
            let millis = delay.trim().parse::<u64>().map_err(|_| SettingsError {
                var: TYPING_DELAY_VAR,
                value: delay.clone(),
            })?;
            builder = builder.with_typing_delay(Duration::from_millis(millis));
        }

        Ok(Self {
            config: builder.build(),
            rules_path: get(RULES_VAR).map(PathBuf::from),
        })
    }
}
