//! Domain layer for Counsel.
//!
//! Topics, their transcripts, the session that owns them, and the composite
//! profile derived from them. No I/O happens in this crate.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod session;
pub mod topic;

pub use aggregate::{aggregate, has_profile};
pub use config::{CounselConfig, EndpointsConfig, PredictionConfig};
pub use error::{CounselError, Result};
pub use session::Session;
pub use topic::{RequestMode, Topic, TopicKind, TopicMode, TopicState, Turn, TurnRole};
