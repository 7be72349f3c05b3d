use crate::vars::Variables;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given variables.
    ///
    /// Rendering is pure and never fails: malformed or unmatched tags are kept
    /// as literal text and unknown variables render as the empty string.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `vars` - Variables available to the template
    ///
    /// # Returns
    /// * `String` - Rendered output
    fn render(&self, template: &str, vars: &Variables) -> String;
}
