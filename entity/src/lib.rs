pub mod client;
pub mod engineer_handoff;
pub mod handover;
pub mod progress_log;
pub mod project;
