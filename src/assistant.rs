use std::fmt;

use log::debug;
use serde::Serialize;

/// Who said a line in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "You"),
            Speaker::Bot => write!(f, "Bot"),
        }
    }
}

struct CareRule {
    keyword: &'static str,
    reply: &'static str,
}

// Checked top to bottom; the first keyword found in the question wins, so
// "water" outranks everything below it.
const CARE_RULES: [CareRule; 5] = [
    CareRule {
        keyword: "water",
        reply: "Water your plants early in the morning. Avoid overwatering!",
    },
    CareRule {
        keyword: "fertilizer",
        reply: "Use compost or organic fertilizer once every two weeks.",
    },
    CareRule {
        keyword: "prevent",
        reply: "Ensure proper air circulation and avoid leaf wetness.",
    },
    CareRule {
        keyword: "sunlight",
        reply: "Most plants need at least 6 hours of sunlight daily.",
    },
    CareRule {
        keyword: "thank",
        reply: "You're welcome! Happy gardening!",
    },
];

/// Reply served when no rule matches.
pub const FALLBACK_REPLY: &str =
    "I'm still learning about that. Try asking about watering, fertilizers, or diseases.";

/// Returns the canned reply for a care question.
///
/// Matching is case-insensitive substring search against the rule table in
/// priority order. Always returns a non-empty reply; unmatched questions get
/// [`FALLBACK_REPLY`].
pub fn reply_for(question: &str) -> &'static str {
    let normalized = question.to_lowercase();
    CARE_RULES
        .iter()
        .find(|rule| normalized.contains(rule.keyword))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK_REPLY)
}

/// An append-only transcript of user/bot exchanges.
///
/// Only [`respond`] appends, and always as a (user, bot) pair, so the log
/// alternates speakers and its length is twice the number of answered
/// questions. The log is display-only: replies never depend on it.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ConversationLog {
    entries: Vec<(Speaker, String)>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All exchanges in submission order.
    pub fn entries(&self) -> &[(Speaker, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Answers a care question and records the exchange.
///
/// Empty input is ignored: nothing is appended and `None` is returned.
/// Whitespace-only input counts as a real question and gets the fallback
/// reply. Otherwise the user line and the bot reply are appended as a pair
/// and the reply is returned.
pub fn respond(log: &mut ConversationLog, input: &str) -> Option<&'static str> {
    if input.is_empty() {
        return None;
    }
    let reply = reply_for(input);
    debug!("Care question answered: {:?} -> {:?}", input, reply);
    log.entries.push((Speaker::User, input.to_string()));
    log.entries.push((Speaker::Bot, reply.to_string()));
    Some(reply)
}
