//! The rule set of the Al-Haramain concierge.
//!
//! Order matters: a question mentioning both price and visa gets the price
//! answer because that rule comes first.

use crate::ReplyRule;

/// Answer to questions about the office.
pub const LOCATION_REPLY: &str = "Kantor pusat Aivoric Travel berlokasi di Surabaya, Jawa Timur. Namun, kami melayani jamaah dari seluruh Indonesia dengan sistem digital penuh.";

/// Answer to questions about prices.
pub const PRICE_REPLY: &str = "Paket kami mulai dari Rp 42.500.000 (Heritage Bronze) hingga Rp 185.000.000 (Royal Gold). Harga mencakup akomodasi, visa, dan mutawwif eksklusif.";

/// Answer to questions about visas and documents.
pub const VISA_REPLY: &str = "Kami menggunakan sistem integrasi Muqeem untuk persetujuan Visa Instan dengan tingkat keberhasilan 99.9%. Anda cukup kirim paspor digital.";

/// Answer to requests for a contact.
pub const CONTACT_REPLY: &str = "Tentu, Anda bisa langsung terhubung dengan Senior Consultant kami. Ketik 'Connect' atau klik tombol WhatsApp di halaman utama.";

/// Answer to questions about hotels.
pub const LODGING_REPLY: &str = "Kami bekerjasama dengan grup Accor dan Fairmont. Untuk paket Gold, kami menjamin hotel Ring 1 (0 meter dari pelataran masjid).";

/// Reply when no topic matches; offers a human agent.
pub const FALLBACK_REPLY: &str = "Pertanyaan yang bagus. Untuk detail spesifik tersebut, izinkan saya menyambungkan Anda dengan agen manusia kami via WhatsApp untuk penjelasan lebih akurat.";

/// Returns the built-in rules in priority order.
pub fn rules() -> Vec<ReplyRule> {
    vec![
        ReplyRule::new(
            "location",
            ["lokasi", "dimana", "alamat", "kantor"],
            LOCATION_REPLY,
        ),
        ReplyRule::new(
            "price",
            ["harga", "biaya", "bayar", "price"],
            PRICE_REPLY,
        ),
        ReplyRule::new("visa", ["visa", "dokumen"], VISA_REPLY),
        // "wa" also hits words like "dewasa"; kept for compatibility.
        ReplyRule::new(
            "contact",
            ["kontak", "wa", "whatsapp", "admin"],
            CONTACT_REPLY,
        ),
        ReplyRule::new("lodging", ["hotel", "penginapan"], LODGING_REPLY),
    ]
}
