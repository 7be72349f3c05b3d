use crate::{
    constants::{tags, DEFAULT_KEYWORD},
    vars::{leading_name, Variables},
};

/// Which way a conditional section tests its variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// `{{#NAME}}`: rendered when NAME is set and non-empty.
    Positive,
    /// `{{^NAME}}`: rendered when NAME is unset or empty.
    Negative,
}

impl SectionKind {
    /// Whether a section of this kind keeps its content for `name`.
    pub fn includes(self, vars: &Variables, name: &str) -> bool {
        match self {
            SectionKind::Positive => vars.is_truthy(name),
            SectionKind::Negative => !vars.is_truthy(name),
        }
    }

    pub fn sigil(self) -> char {
        match self {
            SectionKind::Positive => tags::SECTION,
            SectionKind::Negative => tags::INVERTED,
        }
    }
}

/// A lexical unit of a template. Every variant borrows from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Variable { name: &'a str },
    Default { name: &'a str, default: &'a str },
    Open { kind: SectionKind, name: &'a str, raw: &'a str },
    Close { name: &'a str, raw: &'a str },
}

/// Streams tokens out of template source.
///
/// Anything that looks like `{{` but does not form a complete tag is kept as
/// text, and scanning resumes one byte later so that `{{{X}}}` still yields
/// the `{{X}}` tag in the middle.
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    pending: Option<(Token<'a>, usize)>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0, pending: None }
    }

    /// Tries to read a complete tag starting at `at`, which must point at `{{`.
    /// Returns the token and the byte offset just past it.
    fn tag_at(&self, at: usize) -> Option<(Token<'a>, usize)> {
        let body_start = at + tags::OPEN.len();
        let body = &self.src[body_start..];

        let sigil = body.chars().next()?;
        if sigil == tags::SECTION || sigil == tags::INVERTED || sigil == tags::END {
            let name = leading_name(&body[1..]);
            let after = 1 + name.len();
            if name.is_empty() || !body[after..].starts_with(tags::CLOSE) {
                return None;
            }
            let end = body_start + after + tags::CLOSE.len();
            let raw = &self.src[at..end];
            let token = match sigil {
                tags::END => Token::Close { name, raw },
                tags::SECTION => Token::Open { kind: SectionKind::Positive, name, raw },
                _ => Token::Open { kind: SectionKind::Negative, name, raw },
            };
            return Some((token, end));
        }

        let name = leading_name(body);
        if name.is_empty() {
            return None;
        }
        let after = &body[name.len()..];
        if after.starts_with(tags::CLOSE) {
            let end = body_start + name.len() + tags::CLOSE.len();
            return Some((Token::Variable { name }, end));
        }

        let fallback = after.strip_prefix(DEFAULT_KEYWORD)?;
        let default_len = fallback.find('}').unwrap_or(fallback.len());
        if default_len == 0 || !fallback[default_len..].starts_with(tags::CLOSE) {
            return None;
        }
        let default = &fallback[..default_len];
        let end = body_start
            + name.len()
            + DEFAULT_KEYWORD.len()
            + default_len
            + tags::CLOSE.len();
        Some((Token::Default { name, default }, end))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((token, end)) = self.pending.take() {
            self.pos = end;
            return Some(token);
        }
        if self.pos >= self.src.len() {
            return None;
        }

        let mut scan = self.pos;
        while let Some(offset) = self.src[scan..].find(tags::OPEN) {
            let at = scan + offset;
            if let Some((token, end)) = self.tag_at(at) {
                if at == self.pos {
                    self.pos = end;
                    return Some(token);
                }
                let text = &self.src[self.pos..at];
                self.pending = Some((token, end));
                self.pos = at;
                return Some(Token::Text(text));
            }
            // `{` is one byte, so this stays on a char boundary.
            scan = at + 1;
        }

        let text = &self.src[self.pos..];
        self.pos = self.src.len();
        Some(Token::Text(text))
    }
}
