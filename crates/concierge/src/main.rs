//! Chat with the concierge in the terminal.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::time::Duration;

use concierge::command::Command;
use concierge::core::WidgetState;
use concierge::core::catalog::Catalog;
use concierge::core::handoff::HandoffLink;
use concierge::model::{Message, MessageId, Role};
use concierge::settings::Settings;
use concierge::{Session, SessionBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt};
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::sleep;

enum SessionEvent {
    Message(Message),
    Typing(bool),
    Handoff(HandoffLink),
    Idle,
}

const BAR_CHAR: &str = "▎";

const HELP: &str = "\
Commands:
  /open, /close       show or hide the chat widget
  /wa                 chat with a human (after the concierge offers it)
  /consult            ask for a consultation
  /packages           list packages and prices
  /book <package>     book a package by tier or name
  /check <date> | <pax>
                      check availability for a date and party size
  /history            print the transcript
  /quit               leave";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let builder = match SessionBuilder::from_settings(&settings) {
        Ok(builder) => builder,
        Err(err) => {
            eprintln!("failed to load rules: {err}");
            return;
        }
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let session = builder
        .with_opener({
            let event_tx = event_tx.clone();
            move |link: &HandoffLink| {
                event_tx.send(SessionEvent::Handoff(link.clone())).ok();
            }
        })
        .on_message({
            let event_tx = event_tx.clone();
            move |msg| {
                event_tx.send(SessionEvent::Message(msg.clone())).ok();
            }
        })
        .on_typing({
            let event_tx = event_tx.clone();
            move |typing| {
                event_tx.send(SessionEvent::Typing(typing)).ok();
            }
        })
        .on_idle({
            let event_tx = event_tx.clone();
            move || {
                event_tx.send(SessionEvent::Idle).ok();
            }
        })
        .build();
    session.open();

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    let mut last_action = None;
    flush_events(&session, &mut event_rx, &mut last_action).await;
    println!("{}", "Type /help for commands.".dimmed());

    let mut stdin = io::BufReader::new(io::stdin());

    'outer: loop {
        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line(&mut stdin).await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = Command::parse(line) {
            match command {
                Command::Quit => break,
                Command::History => print_history(&session).await,
                command => {
                    run_command(command, &session, last_action);
                    flush_events(&session, &mut event_rx, &mut last_action)
                        .await;
                }
            }
            continue;
        }

        match session.snapshot().await {
            Ok(snapshot) if snapshot.widget == WidgetState::Open => {}
            Ok(_) => {
                println!("{}", "The chat is closed, /open it first.".dimmed());
                continue;
            }
            Err(_) => break,
        }
        session.send_message(line);

        let mut progress_bar: Option<ProgressBar> = None;

        loop {
            if let Some(progress_bar) = &progress_bar {
                progress_bar.inc(1);
            }

            let sleep = sleep(Duration::from_millis(100));
            let event = select! {
                event = event_rx.recv() => {
                    let Some(event) = event else {
                        break 'outer;
                    };
                    event
                },
                _ = sleep => {
                    continue;
                }
            };

            match event {
                SessionEvent::Typing(true) => {
                    let bar = ProgressBar::new_spinner();
                    bar.set_style(progress_style.clone());
                    bar.set_message("Concierge is typing...");
                    progress_bar = Some(bar);
                }
                SessionEvent::Typing(false) => {
                    if let Some(progress_bar) = progress_bar.take() {
                        progress_bar.finish_and_clear();
                    }
                }
                SessionEvent::Message(msg) => {
                    print_message(&msg, &mut last_action);
                }
                SessionEvent::Handoff(link) => print_handoff(&link),
                SessionEvent::Idle => {
                    break;
                }
            }
        }
    }
}

fn run_command(
    command: Command,
    session: &Session,
    last_action: Option<MessageId>,
) {
    match command {
        Command::Help => println!("{HELP}"),
        Command::Open => session.open(),
        Command::Close => session.close(),
        Command::FollowUp => match last_action {
            Some(id) => session.activate_action(id),
            None => println!("{}", "Nothing to follow up on yet.".dimmed()),
        },
        Command::Consult => session.consult(),
        Command::Packages => print_catalog(session.catalog()),
        Command::Book(query) => {
            if session.book(&query).is_none() {
                println!("Unknown package {query:?}, see /packages.");
            }
        }
        Command::Check { date, pax } => session.check_availability(&date, &pax),
        Command::Unknown(name) => {
            println!("Unknown command /{name}, see /help.")
        }
        Command::Quit | Command::History => {}
    }
}

/// Waits until queued operations are handled, then prints whatever they
/// produced.
async fn flush_events(
    session: &Session,
    event_rx: &mut mpsc::UnboundedReceiver<SessionEvent>,
    last_action: &mut Option<MessageId>,
) {
    if let Err(err) = session.snapshot().await {
        error!("session is gone: {err}");
        return;
    }
    while let Ok(event) = event_rx.try_recv() {
        match event {
            SessionEvent::Message(msg) => print_message(&msg, last_action),
            SessionEvent::Handoff(link) => print_handoff(&link),
            SessionEvent::Typing(_) | SessionEvent::Idle => {}
        }
    }
}

fn print_message(msg: &Message, last_action: &mut Option<MessageId>) {
    if msg.is_user() {
        return;
    }
    let bar = BAR_CHAR.bright_yellow();
    if msg.is_action {
        *last_action = Some(msg.id);
        println!("{bar}{}", msg.text.bright_white());
        println!("{bar}{}", "[Chat via WhatsApp] /wa".bright_green().bold());
    } else {
        println!("{bar}🕌 {}", msg.text.bright_white());
    }
}

async fn print_history(session: &Session) {
    let Ok(snapshot) = session.snapshot().await else {
        return;
    };
    for msg in &snapshot.messages {
        let who = match msg.role {
            Role::User => "you".bright_cyan().to_string(),
            Role::Assistant => "concierge".bright_yellow().to_string(),
        };
        println!("{} {who}: {}", msg.id.dimmed(), msg.text);
    }
}

fn print_handoff(link: &HandoffLink) {
    println!(
        "{}Open this link to continue on WhatsApp:",
        BAR_CHAR.bright_green()
    );
    println!("{}{}", BAR_CHAR.bright_green(), link.url().underline());
}

fn print_catalog(catalog: &Catalog) {
    for package in catalog.packages() {
        println!(
            "{}{:<26} {}",
            BAR_CHAR.bright_yellow(),
            package.name.bright_white(),
            package.price().yellow()
        );
    }
}

/// Reads one line. The reader must outlive the loop, or lines buffered
/// past the first one are lost.
async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Option<String> {
    let mut line = String::new();

    match reader.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_line_keeps_buffered_lines() {
        let mut input = io::BufReader::new(&b"harga?\nvisa?\n/quit\n"[..]);
        assert_eq!(read_line(&mut input).await.as_deref(), Some("harga?\n"));
        assert_eq!(read_line(&mut input).await.as_deref(), Some("visa?\n"));
        assert_eq!(read_line(&mut input).await.as_deref(), Some("/quit\n"));
        assert_eq!(read_line(&mut input).await, None);
    }
}
