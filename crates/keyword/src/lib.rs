//! Rule-based FAQ responder.
//!
//! [`KeywordResponder`] answers visitor questions by checking an ordered
//! list of [`ReplyRule`]s against the lowercased input. The first rule with
//! a keyword occurring anywhere in the text wins; no scoring takes place.
//! When nothing matches, a fallback reply offering a human agent is
//! returned, so the responder never fails.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod builtin;
mod error;
mod rule;

use std::fs;
use std::path::Path;

use concierge_model::{Reply, Responder};
use serde::Deserialize;

pub use error::{Error, ErrorKind};
pub use rule::ReplyRule;

/// Builder for [`KeywordResponder`].
#[derive(Clone, Debug, Default)]
pub struct KeywordResponderBuilder {
    rules: Vec<ReplyRule>,
    fallback: Option<String>,
}

impl KeywordResponderBuilder {
    /// Appends a rule. Rules are checked in the order they were added.
    #[inline]
    pub fn with_rule(mut self, rule: ReplyRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends several rules, keeping their order.
    #[inline]
    pub fn with_rules<I: IntoIterator<Item = ReplyRule>>(
        mut self,
        rules: I,
    ) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the reply used when no rule matches.
    #[inline]
    pub fn with_fallback<S: Into<String>>(mut self, fallback: S) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Builds the responder.
    #[inline]
    pub fn build(self) -> KeywordResponder {
        KeywordResponder {
            rules: self.rules,
            fallback: self
                .fallback
                .unwrap_or_else(|| builtin::FALLBACK_REPLY.to_owned()),
        }
    }
}

/// Shape of a JSON rule file.
#[derive(Deserialize)]
struct RuleFile {
    rules: Vec<ReplyRule>,
    #[serde(default)]
    fallback: Option<String>,
}

/// Answers questions by first-match keyword lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordResponder {
    rules: Vec<ReplyRule>,
    fallback: String,
}

impl KeywordResponder {
    /// Creates an empty builder.
    #[inline]
    pub fn builder() -> KeywordResponderBuilder {
        KeywordResponderBuilder::default()
    }

    /// Loads rules from a JSON document of the form
    /// `{ "rules": [{ "topic", "keywords", "response" }], "fallback": ... }`.
    ///
    /// `fallback` is optional.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let file: RuleFile = serde_json::from_str(json).map_err(|err| {
            Error::new(ErrorKind::Parse).with_reason(err.to_string())
        })?;
        let rules = file
            .rules
            .into_iter()
            .map(ReplyRule::normalized)
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = Self::builder().with_rules(rules);
        if let Some(fallback) = file.fallback {
            if fallback.trim().is_empty() {
                return Err(Error::new(ErrorKind::Invalid)
                    .with_reason("fallback reply is blank"));
            }
            builder = builder.with_fallback(fallback);
        }
        Ok(builder.build())
    }

    /// Reads and parses a JSON rule file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_reason(format!("{}: {err}", path.display()))
        })?;
        let responder = Self::from_json(&json)?;
        debug!(
            "loaded {} rules from {}",
            responder.rules.len(),
            path.display()
        );
        Ok(responder)
    }

    /// Returns the rules in priority order.
    #[inline]
    pub fn rules(&self) -> &[ReplyRule] {
        &self.rules
    }

    /// Returns the fallback reply.
    #[inline]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Returns the first rule that matches `input`, if any.
    pub fn find_rule(&self, input: &str) -> Option<&ReplyRule> {
        let normalized = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&normalized))
    }
}

impl Default for KeywordResponder {
    /// The Al-Haramain rule set.
    fn default() -> Self {
        Self::builder().with_rules(builtin::rules()).build()
    }
}

impl Responder for KeywordResponder {
    fn respond(&self, input: &str) -> Reply {
        match self.find_rule(input) {
            Some(rule) => {
                trace!("matched topic `{}`", rule.topic);
                Reply::answer(rule.response.clone())
            }
            None => {
                trace!("no topic matched, falling back");
                Reply::escalation(self.fallback.clone())
            }
        }
    }
}
