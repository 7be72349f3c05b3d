/// Handles argument parsing and the render workflow.
pub mod cli;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Reading templates and writing results.
pub mod ioutils;

/// The rendering engines.
pub mod renderer;

/// Template lexing and parsing.
pub mod template;

/// The variable mapping and its sources.
pub mod vars;

pub use renderer::{EngineKind, PassRenderer, TemplateRenderer, TreeRenderer};
pub use vars::Variables;
