//! # fracsort-cli
//!
//! CLI output, mixed-number rendering, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::CLIResultPresenter;
