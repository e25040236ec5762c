//! Path and text helpers shared by the pipeline stages.

pub mod route;
pub mod slug;
