//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

pub mod completions;
pub mod generate;
pub mod list;
pub mod preview;
mod utils;

pub use completions::handle_completions;
pub use generate::handle_generate;
pub use list::handle_list;
pub use preview::handle_preview;
