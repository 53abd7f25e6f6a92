//! Slash commands of the terminal front end.

/// A parsed slash command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Leave the chat.
    Quit,
    /// Print the command list.
    Help,
    /// Open the widget.
    Open,
    /// Close the widget.
    Close,
    /// Press the latest "chat via WhatsApp" control.
    FollowUp,
    /// Ask for a consultation.
    Consult,
    /// List packages and prices.
    Packages,
    /// Book a package by tier or name.
    Book(String),
    /// Send the availability form.
    Check {
        /// Travel date, possibly empty.
        date: String,
        /// Party size, possibly empty.
        pax: String,
    },
    /// Print the transcript.
    History,
    /// Anything else, carrying the command name.
    Unknown(String),
}

impl Command {
    /// Parses a line typed at the prompt.
    ///
    /// Returns `None` for lines that do not start with `/`, which are chat
    /// input rather than commands.
    pub fn parse(line: &str) -> Option<Self> {
        let command = line.trim().strip_prefix('/')?;
        let (name, args) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, args)| (name, args.trim()));

        let command = match name {
            "quit" | "exit" => Command::Quit,
            "help" => Command::Help,
            "open" => Command::Open,
            "close" => Command::Close,
            "wa" => Command::FollowUp,
            "consult" => Command::Consult,
            "packages" => Command::Packages,
            "book" => Command::Book(args.to_owned()),
            "check" => {
                let (date, pax) = args.split_once('|').unwrap_or((args, ""));
                Command::Check {
                    date: date.trim().to_owned(),
                    pax: pax.trim().to_owned(),
                }
            }
            "history" => Command::History,
            _ => Command::Unknown(name.to_owned()),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use concierge_core::catalog::{Catalog, Tier};

    use super::*;

    #[test]
    fn test_chat_input_is_not_a_command() {
        assert_eq!(Command::parse("harga paket?"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_check_splits_date_and_pax() {
        assert_eq!(
            Command::parse("/check 1 Des | 2"),
            Some(Command::Check {
                date: "1 Des".to_owned(),
                pax: "2".to_owned(),
            })
        );
        assert_eq!(
            Command::parse("/check Desember 2024"),
            Some(Command::Check {
                date: "Desember 2024".to_owned(),
                pax: String::new(),
            })
        );
        assert_eq!(
            Command::parse("/check"),
            Some(Command::Check {
                date: String::new(),
                pax: String::new(),
            })
        );
    }

    #[test]
    fn test_book_argument_resolves_through_catalog() {
        let Some(Command::Book(query)) = Command::parse("/book  Silver ") else {
            panic!("expected a booking command");
        };
        assert_eq!(query, "Silver");
        let catalog = Catalog::default();
        assert_eq!(catalog.find(&query).unwrap().tier, Tier::Silver);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(Command::parse("/wa"), Some(Command::FollowUp));
        assert_eq!(Command::parse(" /quit "), Some(Command::Quit));
        assert_eq!(Command::parse("/exit"), Some(Command::Quit));
        assert_eq!(Command::parse("/history"), Some(Command::History));
        assert_eq!(
            Command::parse("/teleport now"),
            Some(Command::Unknown("teleport".to_owned()))
        );
    }
}
