//! Topic domain module.
//!
//! # Module Structure
//!
//! - `kind`: the fixed topic catalog (`TopicKind`)
//! - `mode`: request augmentation (`TopicMode`, `RequestMode`)
//! - `message`: transcript entries (`Turn`, `TurnRole`)
//! - `model`: a topic with its transcript and contribution (`Topic`, `TopicState`)

mod kind;
mod message;
mod mode;
mod model;

pub use kind::TopicKind;
pub use message::{Turn, TurnRole};
pub use mode::{RequestMode, TopicMode};
pub use model::{Topic, TopicState};
