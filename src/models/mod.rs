pub mod conversation;
pub mod flight;
pub mod intent;
pub mod reply;
pub mod slots;
pub mod weather;

pub use conversation::{Conversation, ConversationTurn, Role};
pub use flight::{FlightQuery, FlightRecord};
pub use intent::{Intent, IntentFlags};
pub use reply::{FlightStatusReply, Reply, ReplyStatus};
pub use slots::ExtractedSlots;
pub use weather::WeatherReport;
