//! CLI command implementations

pub mod checklist;
pub mod remote;

pub use checklist::{CheckArgs, LogArgs, RenderArgs};
pub use remote::RemoteArgs;
