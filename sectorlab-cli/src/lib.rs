//! SectorLab CLI — interactive prompts, CSV reports and the ranked summary.

/// Command-line flags and fund-set resolution
pub mod config;
/// Logger initialization
pub mod logger;
/// Interactive prompts with retry-on-invalid loops
pub mod prompt;
/// CSV tables and the printed summary
pub mod report;
/// One prompt → fetch → report round per chart
pub mod session;

pub use prompt::{PromptError, Prompter};
pub use report::OutputTarget;
pub use session::Session;
