use crate::{
    constants::{CONDITIONAL_SWEEPS, NAME_PATTERN},
    renderer::interface::TemplateRenderer,
    template::SectionKind,
    vars::Variables,
};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static POSITIVE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\{{\{{#({NAME_PATTERN})\}}\}}"))
        .expect("positive section pattern is valid")
});
static NEGATIVE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\{{\{{\^({NAME_PATTERN})\}}\}}"))
        .expect("negative section pattern is valid")
});
static DEFAULTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\{{\{{({NAME_PATTERN})\|default:([^}}]+)\}}\}}"))
        .expect("default variable pattern is valid")
});
static PLAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\{{\{{({NAME_PATTERN})\}}\}}")).expect("variable pattern is valid")
});

/// Renders by rewriting the template in four sequential passes:
/// positive sections, negative sections, defaulted variables, plain variables.
///
/// Each section pass sweeps the whole string a fixed number of times, which is
/// also the deepest nesting it resolves. Output of a later pass is never seen
/// by an earlier one.
#[derive(Debug, Clone)]
pub struct PassRenderer {
    sweeps: usize,
}

impl PassRenderer {
    pub fn new() -> Self {
        Self { sweeps: CONDITIONAL_SWEEPS }
    }

    /// Overrides the number of sweeps made for each kind of section.
    pub fn with_sweeps(sweeps: usize) -> Self {
        Self { sweeps }
    }

    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    fn resolve_sections(&self, template: &str, kind: SectionKind, vars: &Variables) -> String {
        let opener: &Regex = match kind {
            SectionKind::Positive => &*POSITIVE_OPEN,
            SectionKind::Negative => &*NEGATIVE_OPEN,
        };
        let mut result = template.to_string();
        for sweep in 0..self.sweeps {
            let next = sweep_sections(&result, opener, kind, vars);
            if next == result {
                log::trace!("{kind:?} sections settled after {sweep} sweep(s)");
                break;
            }
            result = next;
        }
        result
    }
}

impl Default for PassRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// One left-to-right sweep replacing every non-overlapping section.
///
/// A section's content is the shortest span up to the first closing tag with
/// the same name. Openers without such a closer are left in place and the
/// search continues right after their first byte.
fn sweep_sections(input: &str, opener: &Regex, kind: SectionKind, vars: &Variables) -> String {
    let mut out = String::with_capacity(input.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(caps) = opener.captures_at(input, search) {
        let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let closer = format!("{{{{/{}}}}}", name.as_str());
        let Some(offset) = input[open.end()..].find(&closer) else {
            // `{` is one byte, so this stays on a char boundary.
            search = open.start() + 1;
            continue;
        };

        let content_end = open.end() + offset;
        out.push_str(&input[copied..open.start()]);
        if kind.includes(vars, name.as_str()) {
            out.push_str(&input[open.end()..content_end]);
        }
        copied = content_end + closer.len();
        search = copied;
    }

    out.push_str(&input[copied..]);
    out
}

impl TemplateRenderer for PassRenderer {
    fn render(&self, template: &str, vars: &Variables) -> String {
        let result = self.resolve_sections(template, SectionKind::Positive, vars);
        let result = self.resolve_sections(&result, SectionKind::Negative, vars);

        let result = DEFAULTED.replace_all(&result, |caps: &Captures| {
            vars.get(&caps[1]).unwrap_or(&caps[2]).to_string()
        });
        let result =
            PLAIN.replace_all(&result, |caps: &Captures| vars.get_or_empty(&caps[1]).to_string());

        result.into_owned()
    }
}
