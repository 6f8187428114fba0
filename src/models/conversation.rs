use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "You are a friendly and helpful airline customer service assistant. Engage with the user warmly, like a human would. You can assist with flight status, flight availability, booking assistance, baggage policies, cancellation policies, frequent flyer program information, and provide real-time updates including weather information.";

pub const GREETING: &str =
    "Hello! Welcome to our airline chatbot service 😊. How can I assist you today?";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Append-only conversation log. The first turn is always the system
/// instruction, which is sent to the chat model but never displayed.
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub id: String,
    pub started_at: DateTime<Utc>,
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_id(id: String) -> Self {
        Self {
            id,
            started_at: Utc::now(),
            turns: vec![
                ConversationTurn {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                ConversationTurn::assistant(GREETING),
            ],
        }
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn system_prompt(&self) -> &str {
        self.turns
            .first()
            .filter(|t| t.role == Role::System)
            .map(|t| t.content.as_str())
            .unwrap_or(SYSTEM_PROMPT)
    }

    /// Turns shown to the user: everything except the system instruction.
    pub fn displayable(&self) -> &[ConversationTurn] {
        match self.turns.first() {
            Some(t) if t.role == Role::System => &self.turns[1..],
            _ => &self.turns,
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
