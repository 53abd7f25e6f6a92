use std::sync::{Arc, Mutex};
use std::time::Duration;

use concierge_keyword::KeywordResponder;
use concierge_keyword::builtin::{FALLBACK_REPLY, PRICE_REPLY};
use concierge_model::{MessageId, Role};
use concierge_test_responder::ScriptedResponder;
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;

use crate::handoff::{HandoffKind, HandoffLink};
use crate::{Concierge, ConciergeBuilder, ConciergeConfig, WidgetState};

type Links = Arc<Mutex<Vec<HandoffLink>>>;

fn build_with<R: concierge_model::Responder + 'static>(
    responder: R,
) -> (Concierge, Links) {
    let links = Links::default();
    let concierge = ConciergeBuilder::with_responder(responder)
        .with_opener({
            let links = Arc::clone(&links);
            move |link: &HandoffLink| links.lock().unwrap().push(link.clone())
        })
        .build();
    (concierge, links)
}

fn decoded_text(link: &HandoffLink) -> String {
    let (_, query) = link.url().split_once("?text=").unwrap();
    urlencoding::decode(query).unwrap().into_owned()
}

#[tokio::test]
async fn test_session_starts_with_greeting() {
    let (concierge, _) = build_with(KeywordResponder::default());
    let snapshot = concierge.snapshot().await.unwrap();

    assert_eq!(snapshot.widget, WidgetState::Closed);
    assert!(!snapshot.awaiting_reply);
    assert_eq!(snapshot.messages.len(), 1);
    assert_eq!(snapshot.messages[0].id, MessageId::new(1));
    assert_eq!(snapshot.messages[0].role, Role::Assistant);
    assert!(snapshot.messages[0].text.starts_with("Assalamu’alaikum."));
}

#[tokio::test]
async fn test_toggle() {
    let (concierge, _) = build_with(KeywordResponder::default());
    concierge.toggle();
    assert_eq!(concierge.snapshot().await.unwrap().widget, WidgetState::Open);
    concierge.toggle();
    assert_eq!(concierge.snapshot().await.unwrap().widget, WidgetState::Closed);
    concierge.open();
    concierge.open();
    assert_eq!(concierge.snapshot().await.unwrap().widget, WidgetState::Open);
    concierge.close();
    assert_eq!(concierge.snapshot().await.unwrap().widget, WidgetState::Closed);
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_is_ignored() {
    let responder = ScriptedResponder::default();
    let (concierge, _) = build_with(responder.clone());
    concierge.open();
    concierge.submit_input("");
    concierge.submit_input("   \t\n");

    sleep(Duration::from_secs(5)).await;
    let snapshot = concierge.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 1);
    assert!(!snapshot.awaiting_reply);
    assert!(responder.inputs().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_input_while_closed_is_ignored() {
    let responder = ScriptedResponder::default();
    let (concierge, _) = build_with(responder.clone());
    concierge.submit_input("halo");

    sleep(Duration::from_secs(5)).await;
    assert_eq!(concierge.snapshot().await.unwrap().messages.len(), 1);
    assert!(responder.inputs().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_reply_arrives_after_typing_delay() {
    let (concierge, links) = build_with(KeywordResponder::default());
    concierge.open();
    concierge.submit_input("  Berapa harga paket Gold?  ");

    let snapshot = concierge.snapshot().await.unwrap();
    assert!(snapshot.awaiting_reply);
    assert_eq!(snapshot.messages.len(), 2);
    assert_eq!(snapshot.messages[1].role, Role::User);
    assert_eq!(snapshot.messages[1].text, "Berapa harga paket Gold?");

    sleep(Duration::from_millis(1199)).await;
    assert_eq!(concierge.snapshot().await.unwrap().messages.len(), 2);

    sleep(Duration::from_millis(2)).await;
    let snapshot = concierge.snapshot().await.unwrap();
    assert!(!snapshot.awaiting_reply);
    assert_eq!(snapshot.messages.len(), 3);
    assert_eq!(snapshot.messages[2].role, Role::Assistant);
    assert_eq!(snapshot.messages[2].text, PRICE_REPLY);

    // An answered question schedules nothing else.
    sleep(Duration::from_secs(5)).await;
    assert_eq!(concierge.snapshot().await.unwrap().messages.len(), 3);
    assert!(links.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_fallback_offers_action() {
    let (concierge, _) = build_with(KeywordResponder::default());
    concierge.open();
    concierge.submit_input("terima kasih");

    sleep(Duration::from_millis(1300)).await;
    let snapshot = concierge.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 3);
    assert_eq!(snapshot.messages[2].text, FALLBACK_REPLY);
    assert!(!snapshot.messages[2].is_action);

    sleep(Duration::from_millis(500)).await;
    let snapshot = concierge.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 4);
    let action = &snapshot.messages[3];
    assert_eq!(action.role, Role::Assistant);
    assert!(action.is_action);
    assert_eq!(action.text, "Klik tombol di bawah untuk chat langsung:");
}

#[tokio::test(start_paused = true)]
async fn test_closing_does_not_cancel_pending_reply() {
    let (concierge, _) = build_with(KeywordResponder::default());
    concierge.open();
    concierge.submit_input("hotel?");
    concierge.close();

    sleep(Duration::from_secs(2)).await;
    let snapshot = concierge.snapshot().await.unwrap();
    assert_eq!(snapshot.widget, WidgetState::Closed);
    assert_eq!(snapshot.messages.len(), 3);

    concierge.open();
    assert_eq!(concierge.snapshot().await.unwrap().messages.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_ids_increase_in_display_order() {
    let (concierge, _) = build_with(KeywordResponder::default());
    concierge.open();
    concierge.submit_input("dimana kantornya?");
    concierge.submit_input("ada diskon?");
    sleep(Duration::from_secs(3)).await;

    let messages = concierge.snapshot().await.unwrap().messages;
    let roles: Vec<_> = messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        [
            Role::Assistant,
            Role::User,
            Role::User,
            Role::Assistant,
            Role::Assistant,
            Role::Assistant,
        ]
    );
    assert!(messages[5].is_action);
    assert!(messages.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test(start_paused = true)]
async fn test_typing_indicator_spans_overlapping_replies() {
    let (typing_tx, mut typing_rx) = mpsc::unbounded_channel();
    let concierge = ConciergeBuilder::with_responder(KeywordResponder::default())
        .on_typing(move |typing| {
            typing_tx.send(typing).unwrap();
        })
        .build();
    concierge.open();
    concierge.submit_input("visa?");
    sleep(Duration::from_millis(600)).await;
    concierge.submit_input("hotel?");
    sleep(Duration::from_secs(3)).await;

    concierge.snapshot().await.unwrap();
    let mut events = vec![];
    while let Ok(typing) = typing_rx.try_recv() {
        events.push(typing);
    }
    assert_eq!(events, [true, false]);
}

#[tokio::test(start_paused = true)]
async fn test_idle_after_action_message() {
    let (idle_tx, mut idle_rx) = watch::channel(0u32);
    let concierge = ConciergeBuilder::with_responder(KeywordResponder::default())
        .with_config(
            ConciergeConfig::builder()
                .with_typing_delay(Duration::from_millis(100))
                .with_action_delay(Duration::from_millis(50))
                .build(),
        )
        .on_idle(move || {
            idle_tx.send_modify(|count| *count += 1);
        })
        .build();
    concierge.open();
    concierge.submit_input("apa kabar?");

    idle_rx.wait_for(|count| *count == 1).await.unwrap();
    let messages = concierge.snapshot().await.unwrap().messages;
    assert!(messages.last().unwrap().is_action);
}

#[tokio::test(start_paused = true)]
async fn test_activate_action_hands_off_without_responding() {
    let responder = ScriptedResponder::default();
    responder.add_escalation("Saya sambungkan ke agen.");
    let (concierge, links) = build_with(responder.clone());
    concierge.open();
    concierge.submit_input("boleh bawa anak?");
    sleep(Duration::from_secs(2)).await;

    let messages = concierge.snapshot().await.unwrap().messages;
    let action = messages.last().unwrap();
    assert!(action.is_action);

    // The user message is not an action.
    concierge.activate_action(messages[1].id);
    concierge.activate_action(action.id);
    concierge.snapshot().await.unwrap();

    let links = links.lock().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].kind(), &HandoffKind::ChatEscalation);
    assert_eq!(
        decoded_text(&links[0]),
        "Halo, saya diarahkan oleh AI Concierge untuk pertanyaan lanjut."
    );
    assert_eq!(responder.inputs(), ["boleh bawa anak?"]);
}

#[tokio::test]
async fn test_page_handoffs() {
    let (concierge, links) = build_with(KeywordResponder::default());
    concierge.request_consult();
    concierge.book_package("Silver Serenity Madinah");
    concierge.check_availability("", "4");
    concierge.snapshot().await.unwrap();

    let texts: Vec<_> = links.lock().unwrap().iter().map(decoded_text).collect();
    assert_eq!(
        texts,
        [
            "Halo, saya butuh bantuan login client portal.",
            "Assalamu'alaikum Aivoric, saya tertarik memesan paket *Silver Serenity Madinah*. Mohon info ketersediaan untuk tanggal terdekat.",
            "Assalamu'alaikum Aivoric, saya ingin cek ketersediaan untuk:\n- Tanggal: Belum ditentukan\n- Jamaah: 4 Pax\nMohon bantuannya.",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_end_drops_pending_reply() {
    let (concierge, _) = build_with(KeywordResponder::default());
    concierge.open();
    concierge.submit_input("visa?");
    let observer = Concierge {
        handle: concierge.handle.clone(),
    };
    concierge.end();

    sleep(Duration::from_secs(2)).await;
    assert!(observer.snapshot().await.is_err());
}
