//! Deep links that hand the visitor over to a human on the messaging app.

use std::fmt::{self, Display};

use crate::config::ContactConfig;

/// Substituted for form fields the visitor left empty.
pub const UNSPECIFIED: &str = "Belum ditentukan";

/// The places a handoff can be started from, each with its own preset
/// message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandoffKind {
    /// The "Consult" button in the navigation bar.
    Consult,
    /// The action control offered after a fallback reply.
    ChatEscalation,
    /// Booking one of the packages.
    Booking {
        /// Package name as shown to the visitor.
        package: String,
    },
    /// The custom availability form.
    Availability {
        /// Free-form travel date.
        date: String,
        /// Free-form number of travellers.
        pax: String,
    },
}

impl HandoffKind {
    /// Renders the preset message of this call site.
    pub fn message(&self) -> String {
        match self {
            HandoffKind::Consult => {
                "Halo, saya butuh bantuan login client portal.".to_owned()
            }
            HandoffKind::ChatEscalation => {
                "Halo, saya diarahkan oleh AI Concierge untuk pertanyaan lanjut."
                    .to_owned()
            }
            HandoffKind::Booking { package } => format!(
                "Assalamu'alaikum Aivoric, saya tertarik memesan paket *{package}*. Mohon info ketersediaan untuk tanggal terdekat."
            ),
            HandoffKind::Availability { date, pax } => format!(
                "Assalamu'alaikum Aivoric, saya ingin cek ketersediaan untuk:\n- Tanggal: {}\n- Jamaah: {} Pax\nMohon bantuannya.",
                or_unspecified(date),
                or_unspecified(pax),
            ),
        }
    }
}

#[inline]
fn or_unspecified(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() { UNSPECIFIED } else { value }
}

/// A ready-to-open deep link.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandoffLink {
    kind: HandoffKind,
    message: String,
    url: String,
}

impl HandoffLink {
    /// Builds the link for `kind` pointing at `contact`.
    pub fn new(contact: &ContactConfig, kind: HandoffKind) -> Self {
        let message = kind.message();
        let url = format!(
            "{}/{}?text={}",
            contact.base_url.trim_end_matches('/'),
            contact.phone,
            urlencoding::encode(&message)
        );
        Self { kind, message, url }
    }

    /// Returns the call site.
    #[inline]
    pub fn kind(&self) -> &HandoffKind {
        &self.kind
    }

    /// Returns the unencoded preset message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the full URL.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Display for HandoffLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Opens handoff links, usually in a new browser window.
///
/// Whether opening succeeded is not reported back.
pub trait LinkOpener: Send + Sync {
    /// Opens the link.
    fn open(&self, link: &HandoffLink);
}

impl<F> LinkOpener for F
where
    F: Fn(&HandoffLink) + Send + Sync,
{
    #[inline]
    fn open(&self, link: &HandoffLink) {
        self(link)
    }
}

/// An opener that only logs the link.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogOpener;

impl LinkOpener for LogOpener {
    fn open(&self, link: &HandoffLink) {
        info!("handoff link: {}", link.url());
    }
}
