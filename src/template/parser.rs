use super::token::{Lexer, SectionKind, Token};
use std::collections::HashMap;

/// One entry of a parsed template.
///
/// Templates parse to a flat list: a `Section` owns the `len` entries that
/// directly follow it, nested sections included. Skipping a dropped section
/// is a jump over those entries, so neither rendering nor dropping the list
/// recurses on nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Variable(String),
    Default { name: String, default: String },
    Section { kind: SectionKind, name: String, len: usize },
}

/// A section whose closing tag has not been seen yet.
struct Frame {
    kind: SectionKind,
    name: String,
    /// Index of the opener in the node list, held as `Node::Text` until closed.
    at: usize,
}

struct Builder {
    nodes: Vec<Node>,
    stack: Vec<Frame>,
    /// Open frames per name, so closers with no opener skip the stack scan.
    open: HashMap<String, usize>,
    /// Text is only merged into entries at or after this index.
    merge_floor: usize,
}

impl Builder {
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.nodes.len() > self.merge_floor {
            if let Some(Node::Text(last)) = self.nodes.last_mut() {
                last.push_str(text);
                return;
            }
        }
        self.nodes.push(Node::Text(text.to_string()));
    }

    fn open(&mut self, kind: SectionKind, name: &str, raw: &str) {
        self.stack.push(Frame { kind, name: name.to_string(), at: self.nodes.len() });
        *self.open.entry(name.to_string()).or_default() += 1;
        self.nodes.push(Node::Text(raw.to_string()));
        self.merge_floor = self.nodes.len();
    }

    fn close(&mut self, name: &str, raw: &str) {
        if self.open.get(name).copied().unwrap_or_default() == 0 {
            log::trace!("Unmatched closing tag '{raw}' kept as text");
            self.push_text(raw);
            return;
        }
        // Frames above the match never closed; their openers stay text.
        while let Some(frame) = self.stack.pop() {
            if let Some(count) = self.open.get_mut(&frame.name) {
                *count -= 1;
            }
            if frame.name == name {
                let len = self.nodes.len() - frame.at - 1;
                self.nodes[frame.at] = Node::Section { kind: frame.kind, name: frame.name, len };
                break;
            }
            log::trace!("Unclosed section '{}{}' kept as text", frame.kind.sigil(), frame.name);
        }
        self.merge_floor = self.nodes.len();
    }
}

/// Parses template source into a flat node list.
///
/// Parsing never fails and runs in time linear in the input. A closing tag
/// pairs with the nearest open section of the same name; sections left open
/// inside it, and any section still open at the end of input, keep their
/// opening tag as literal text. A closing tag with no open section of its
/// name is literal text.
pub fn parse(src: &str) -> Vec<Node> {
    let mut builder = Builder {
        nodes: Vec::new(),
        stack: Vec::new(),
        open: HashMap::new(),
        merge_floor: 0,
    };

    for token in Lexer::new(src) {
        match token {
            Token::Text(text) => builder.push_text(text),
            Token::Variable { name } => builder.nodes.push(Node::Variable(name.to_string())),
            Token::Default { name, default } => builder.nodes.push(Node::Default {
                name: name.to_string(),
                default: default.to_string(),
            }),
            Token::Open { kind, name, raw } => builder.open(kind, name, raw),
            Token::Close { name, raw } => builder.close(name, raw),
        }
    }

    builder.nodes
}
