//! Keyword-rule chat replies used when the remote chat endpoint is not
//! reachable, and the in-memory transcript.

use shared::{ChatMessage, ChatSender};

pub const GREETING: &str =
    "Hi! I'm your finance assistant. Ask me about budgeting, saving, spending or investing.";

const BUDGET_REPLY: &str = "Based on your spending patterns, I recommend allocating 50% for needs, 30% for wants, and 20% for savings. You're currently spending a bit more on wants than the recommended amount.";
const SAVINGS_REPLY: &str = "You're on track to meet your savings goal! Just ₹1,500 more to go. Have you considered setting up automatic transfers to your savings account?";
const EXPENSE_REPLY: &str = "Your biggest expense categories this month are housing (30%) and food (20%). Your food expenses are 15% higher than last month.";
const INVEST_REPLY: &str = "Based on your risk profile and goals, I'd recommend considering a mix of index funds and fixed deposits. Would you like me to provide more specific recommendations?";
const GENERIC_REPLY: &str = "I'm here to help with your financial questions. You can ask me about your spending, budgeting tips, savings goals, or investment advice!";

/// Ordered rules; the first rule with a matching keyword wins
const RULES: &[(&[&str], &str)] = &[
    (&["budget", "spending"], BUDGET_REPLY),
    (&["save", "saving"], SAVINGS_REPLY),
    (&["spend", "expense"], EXPENSE_REPLY),
    (&["invest", "investment"], INVEST_REPLY),
];

/// Canned reply for a user message, matched case-insensitively
pub fn rule_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(GENERIC_REPLY)
}

/// Chat history of the current page; never persisted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_greeting() -> Self {
        let mut transcript = Self::new();
        transcript.push_bot(GREETING);
        transcript
    }

    /// Record a user message. Blank input is ignored and yields `None`;
    /// otherwise the trimmed text is returned for sending.
    pub fn push_user(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            sender: ChatSender::User,
            text: trimmed.to_string(),
        });
        Some(trimmed.to_string())
    }

    pub fn push_bot(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            sender: ChatSender::Bot,
            text: text.to_string(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
