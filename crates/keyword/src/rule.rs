use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// A topic the responder knows how to answer.
///
/// A rule fires when any of its keywords occurs anywhere in the lowercased
/// input. Keywords are stored lowercased.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplyRule {
    /// Short label used in logs.
    pub topic: String,
    /// Trigger words, synonyms of the topic.
    pub keywords: Vec<String>,
    /// The canned answer.
    pub response: String,
}

impl ReplyRule {
    /// Creates a rule, lowercasing its keywords.
    pub fn new<T, K, R>(topic: T, keywords: K, response: R) -> Self
    where
        T: Into<String>,
        K: IntoIterator,
        K::Item: AsRef<str>,
        R: Into<String>,
    {
        let keywords = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().to_lowercase())
            .collect();
        Self {
            topic: topic.into(),
            keywords,
            response: response.into(),
        }
    }

    /// Returns `true` if any keyword occurs in `normalized`, which must
    /// already be lowercased.
    #[inline]
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }

    /// Lowercases keywords and rejects rules that could never fire or
    /// would answer with nothing.
    pub(crate) fn normalized(mut self) -> Result<Self, Error> {
        if self.keywords.is_empty() {
            return Err(Error::new(ErrorKind::Invalid).with_reason(format!(
                "rule `{}` has no keywords",
                self.topic
            )));
        }
        for keyword in &mut self.keywords {
            if keyword.trim().is_empty() {
                return Err(Error::new(ErrorKind::Invalid).with_reason(
                    format!("rule `{}` has a blank keyword", self.topic),
                ));
            }
            *keyword = keyword.to_lowercase();
        }
        if self.response.trim().is_empty() {
            return Err(Error::new(ErrorKind::Invalid).with_reason(format!(
                "rule `{}` has a blank response",
                self.topic
            )));
        }
        Ok(self)
    }
}
