use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
    Success,
    NotFound,
    Failed,
}

/// Output of a responder: display text plus how the lookup went.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Reply {
    pub text: String,
    pub status: ReplyStatus,
}

impl Reply {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: ReplyStatus::Success,
        }
    }

    pub fn not_found(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: ReplyStatus::NotFound,
        }
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: ReplyStatus::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ReplyStatus::Success
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlightStatusReply {
    pub reply: Reply,
    pub arrival_airport: Option<String>,
    pub arrival_iata: Option<String>,
}
