use envplate::renderer::{get_renderer, EngineKind, PassRenderer, TemplateRenderer, TreeRenderer};
use envplate::Variables;
use test_log::test;

const ENGINES: [EngineKind; 2] = [EngineKind::Tree, EngineKind::Passes];

fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs.iter().copied().collect()
}

/// Asserts that every engine renders `template` to `expected`.
fn assert_renders(template: &str, pairs: &[(&str, &str)], expected: &str) {
    let vars = vars(pairs);
    for kind in ENGINES {
        let out = get_renderer(kind).render(template, &vars);
        assert_eq!(out, expected, "engine {kind} on {template:?}");
    }
}

#[test]
fn text_without_markup_is_unchanged() {
    for template in ["", "plain text", "line one\nline two\n", "a { b } c", "{ {X} }", "ünïcødé ✓"] {
        assert_renders(template, &[("X", "1")], template);
    }
}

#[test]
fn plain_variables() {
    assert_renders("{{X}}", &[], "");
    assert_renders("{{X}}", &[("X", "a")], "a");
    assert_renders("Hello {{NAME}}!", &[("NAME", "world")], "Hello world!");
    assert_renders("{{A}}{{B}}{{A}}", &[("A", "1"), ("B", "2")], "121");
}

#[test]
fn defaulted_variables_use_presence() {
    assert_renders("{{X|default:foo}}", &[], "foo");
    assert_renders("{{X|default:foo}}", &[("X", "")], "");
    assert_renders("{{X|default:foo}}", &[("X", "bar")], "bar");
    assert_renders("{{X|default: spaced out }}", &[], " spaced out ");
    assert_renders("{{X|default:{{Y}}", &[("Y", "y")], "{{Y");
}

#[test]
fn positive_sections_use_truthiness() {
    assert_renders("{{#X}}hi{{/X}}", &[], "");
    assert_renders("{{#X}}hi{{/X}}", &[("X", "")], "");
    assert_renders("{{#X}}hi{{/X}}", &[("X", "1")], "hi");
    assert_renders("{{#X}}hi{{/X}}", &[("X", "false")], "hi");
}

#[test]
fn negative_sections_are_the_complement() {
    for value in [None, Some(""), Some("1"), Some("0")] {
        let pairs: Vec<(&str, &str)> = value.map(|v| ("X", v)).into_iter().collect();
        let vars = vars(&pairs);
        for kind in ENGINES {
            let renderer = get_renderer(kind);
            let positive = renderer.render("{{#X}}hi{{/X}}", &vars);
            let negative = renderer.render("{{^X}}hi{{/X}}", &vars);
            assert_eq!(format!("{positive}{negative}"), "hi", "engine {kind}, X={value:?}");
        }
    }
}

#[test]
fn sections_span_newlines_and_reveal_variables() {
    let template = "apiVersion: v1\n{{#TLS}}tls:\n  secret: {{TLS_SECRET|default:tls-cert}}\n{{/TLS}}name: {{NAME}}\n";
    assert_renders(
        template,
        &[("TLS", "yes"), ("NAME", "web")],
        "apiVersion: v1\ntls:\n  secret: tls-cert\nname: web\n",
    );
    assert_renders(template, &[("NAME", "web")], "apiVersion: v1\nname: web\n");
}

#[test]
fn nesting_up_to_three_levels_resolves() {
    let all = [("A", "1"), ("B", "1"), ("C", "1")];
    assert_renders("{{#A}}{{#B}}inner{{/B}}{{/A}}", &all, "inner");
    assert_renders("{{#A}}{{#B}}{{#C}}deep{{/C}}{{/B}}{{/A}}", &all, "deep");
    assert_renders("{{#A}}{{^B}}no b{{/B}}{{/A}}", &[("A", "1")], "no b");
    assert_renders("{{^A}}{{#B}}b only{{/B}}{{/A}}", &[("B", "1")], "b only");
}

#[test]
fn fourth_level_only_resolves_in_the_tree_engine() {
    let template = "{{#A}}{{#A}}{{#A}}{{#A}}x{{/A}}{{/A}}{{/A}}{{/A}}";
    let vars = vars(&[("A", "1")]);
    assert_eq!(TreeRenderer::new().render(template, &vars), "x");
    let passes = PassRenderer::new().render(template, &vars);
    assert!(passes.contains("{{#A}}"), "{passes}");
}

#[test]
fn malformed_markup_passes_through() {
    assert_renders("{{/X}}", &[("X", "1")], "{{/X}}");
    assert_renders("{{#X}}never closed", &[("X", "1")], "{{#X}}never closed");
    assert_renders("{{ X }}", &[("X", "1")], "{{ X }}");
    assert_renders("{{X-Y}}", &[("X", "1")], "{{X-Y}}");
    assert_renders("{{X|default:}}", &[], "{{X|default:}}");
    assert_renders("{{{X}}}", &[("X", "1")], "{1}");
}

#[test]
fn engines_agree_on_unicode_tag_names() {
    assert_renders("{{A\u{203F}B}}", &[("A\u{203F}B", "connector")], "connector");
    assert_renders("{{E\u{301}|default:d}}", &[], "d");
    assert_renders("{{#N\u{301}}}on{{/N\u{301}}}", &[("N\u{301}", "1")], "on");
}

#[test]
fn output_is_idempotent_once_resolved() {
    let template = "{{#A}}a={{A}} {{/A}}{{^B}}no-b {{/B}}{{C|default:c}}";
    let vars = vars(&[("A", "1")]);
    for kind in ENGINES {
        let renderer = get_renderer(kind);
        let once = renderer.render(template, &vars);
        assert_eq!(once, "a=1 no-b c");
        assert_eq!(renderer.render(&once, &vars), once);
    }
}

#[test]
fn environment_filter_keeps_uppercase_names() {
    let vars = Variables::from_pairs([("PATH", "/bin"), ("path", "/usr/bin"), ("HOME_2", "/h")]);
    assert!(vars.contains("PATH"));
    assert!(vars.contains("HOME_2"));
    assert!(!vars.contains("path"));
    assert_renders("{{path}}", &[], "");
}
