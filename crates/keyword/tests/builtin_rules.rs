use concierge_keyword::KeywordResponder;
use concierge_keyword::builtin::{
    CONTACT_REPLY, FALLBACK_REPLY, LOCATION_REPLY, LODGING_REPLY, PRICE_REPLY,
    VISA_REPLY,
};
use concierge_model::{Reply, Responder};

fn respond(input: &str) -> Reply {
    KeywordResponder::default().respond(input)
}

#[test]
fn test_topic_replies() {
    let cases = [
        ("Dimana kantor kalian?", LOCATION_REPLY),
        ("Alamat lengkapnya?", LOCATION_REPLY),
        ("Berapa biaya umrah?", PRICE_REPLY),
        ("What is the PRICE?", PRICE_REPLY),
        ("Dokumen apa saja yang perlu?", VISA_REPLY),
        ("Nomor kontak?", CONTACT_REPLY),
        ("Bisa hubungi admin?", CONTACT_REPLY),
        ("Penginapan dekat masjid?", LODGING_REPLY),
    ];
    for (input, expected) in cases {
        assert_eq!(respond(input), Reply::answer(expected), "input: {input}");
    }
}

#[test]
fn test_price_question_for_gold_package() {
    let reply = respond("Berapa harga paket Gold?");
    assert!(!reply.escalate);
    assert_eq!(reply.text, PRICE_REPLY);
    assert!(reply.text.contains("Rp 42.500.000"));
    assert!(reply.text.contains("Rp 185.000.000"));
}

#[test]
fn test_earlier_rule_wins() {
    assert_eq!(respond("harga visa berapa?").text, PRICE_REPLY);
    assert_eq!(respond("visa dan hotel").text, VISA_REPLY);
    assert_eq!(respond("lokasi hotel").text, LOCATION_REPLY);
    // "dewasa" contains "wa", which beats the later lodging rule.
    assert_eq!(respond("hotel untuk dewasa").text, CONTACT_REPLY);
}

#[test]
fn test_unknown_question_escalates() {
    let reply = respond("terima kasih");
    assert!(reply.escalate);
    assert_eq!(reply.text, FALLBACK_REPLY);
}
