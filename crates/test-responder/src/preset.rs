use concierge_model::Reply;
use serde::{Deserialize, Serialize};

/// A scripted reply.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "text")]
pub enum PresetReply {
    /// Answers with the text.
    #[serde(rename = "answer")]
    Answer(String),
    /// Falls back with the text, asking for escalation.
    #[serde(rename = "escalate")]
    Escalate(String),
}

impl From<PresetReply> for Reply {
    fn from(preset: PresetReply) -> Self {
        match preset {
            PresetReply::Answer(text) => Reply::answer(text),
            PresetReply::Escalate(text) => Reply::escalation(text),
        }
    }
}
