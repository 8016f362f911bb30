//! Application layer for Counsel.
//!
//! Coordinates the domain session with the prediction client.

pub mod topic_controller;

pub use topic_controller::{
    FinishNotice, NOT_IMPLEMENTED_REPLY, ResumeAttachment, TopicController, UNEXPECTED_ERROR_REPLY,
    render_reply, request_mode,
};
