//! Template rendering engines.
//!
//! Both engines implement [`TemplateRenderer`]; [`get_renderer`] picks one by
//! [`EngineKind`].

pub mod interface;
pub mod passes;
pub mod tree;

pub use interface::TemplateRenderer;
pub use passes::PassRenderer;
pub use tree::TreeRenderer;

use clap::ValueEnum;
use std::fmt::Display;

/// Selects the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EngineKind {
    /// Sequential rewrite passes. Conditional nesting resolves up to three levels.
    #[default]
    Passes,
    /// Parse into a flat node list and render in one walk. Nesting depth is unlimited.
    Tree,
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EngineKind::Tree => "tree",
            EngineKind::Passes => "passes",
        };
        write!(f, "{s}")
    }
}

/// Builds the renderer for `kind`.
pub fn get_renderer(kind: EngineKind) -> Box<dyn TemplateRenderer> {
    match kind {
        EngineKind::Tree => Box::new(TreeRenderer::new()),
        EngineKind::Passes => Box::new(PassRenderer::new()),
    }
}
