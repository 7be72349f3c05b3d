use crate::{
    renderer::interface::TemplateRenderer,
    template::{parse, Node},
    vars::Variables,
};

/// Renders by parsing the template into a flat [`Node`] list and walking it once.
///
/// Sections nest to any depth and substituted values are emitted verbatim,
/// never scanned for markup.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TreeRenderer {
    fn render(&self, template: &str, vars: &Variables) -> String {
        let nodes = parse(template);
        let mut out = String::with_capacity(template.len());
        render_nodes(&nodes, vars, &mut out);
        out
    }
}

/// Appends the rendering of `nodes` to `out`.
pub fn render_nodes(nodes: &[Node], vars: &Variables, out: &mut String) {
    let mut i = 0;
    while i < nodes.len() {
        match &nodes[i] {
            Node::Text(text) => out.push_str(text),
            Node::Variable(name) => out.push_str(vars.get_or_empty(name)),
            Node::Default { name, default } => {
                out.push_str(vars.get(name).unwrap_or(default));
            }
            Node::Section { kind, name, len } => {
                if !kind.includes(vars, name) {
                    log::trace!("Dropping section '{}{name}'", kind.sigil());
                    i += len;
                }
            }
        }
        i += 1;
    }
}
