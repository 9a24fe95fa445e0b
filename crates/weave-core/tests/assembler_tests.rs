use pretty_assertions::assert_eq;
use rstest::rstest;
use weave_core::{Assembler, Library, Tier, TierKind, Warning, assemble};
use weave_test_utils::SnippetLibrary;

fn tiers(lib: &SnippetLibrary) -> Vec<Tier> {
    vec![
        Tier::new(lib.tier("workspace"), TierKind::Workspace),
        Tier::new(lib.tier("builtin"), TierKind::Builtin),
    ]
}

#[test]
fn preserves_include_order_with_one_blank_line() {
    let lib = SnippetLibrary::new();
    // File names deliberately sort opposite to the include order.
    lib.write_named("builtin", "3.md", "a", "Alpha");
    lib.write_named("workspace", "2.md", "b", "Bravo");
    lib.write_named("builtin", "1.md", "c", "Charlie");

    let (text, warnings) = assemble(&["a", "b", "c"], &tiers(&lib)).unwrap();
    assert_eq!(text, "Alpha\n\nBravo\n\nCharlie");
    assert!(warnings.is_empty());
}

#[test]
fn missing_snippet_is_skipped_with_warning() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("builtin", "a", "Alpha");
    lib.write_snippet("builtin", "b", "Bravo");

    let (text, warnings) = assemble(&["a", "missing", "b"], &tiers(&lib)).unwrap();
    assert_eq!(text, "Alpha\n\nBravo");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].to_string(), "snippet not found: missing");
}

#[test]
fn all_missing_yields_empty_text() {
    let lib = SnippetLibrary::new();
    let (text, warnings) = assemble(&["x", "y"], &tiers(&lib)).unwrap();
    assert_eq!(text, "");
    assert_eq!(
        warnings,
        vec![
            Warning::SnippetNotFound { name: "x".into() },
            Warning::SnippetNotFound { name: "y".into() },
        ]
    );
}

#[test]
fn empty_include_is_empty_text() {
    let lib = SnippetLibrary::new();
    let include: [&str; 0] = [];
    let (text, warnings) = assemble(&include, &tiers(&lib)).unwrap();
    assert_eq!(text, "");
    assert!(warnings.is_empty());
}

#[rstest]
#[case("\n\n  Body with padding  \n\n\n", "Body with padding")]
#[case("Line one\nLine two   \n", "Line one\nLine two")]
#[case("\tTabbed\t", "Tabbed")]
fn bodies_are_trimmed(#[case] body: &str, #[case] expected: &str) {
    let lib = SnippetLibrary::new();
    lib.write_snippet("builtin", "a", body);

    let (text, _) = assemble(&["a"], &tiers(&lib)).unwrap();
    assert_eq!(text, expected);
}

#[test]
fn whitespace_only_body_adds_no_blank_lines() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("builtin", "a", "Alpha");
    lib.write_snippet("builtin", "blank", "   \n\n  ");
    lib.write_snippet("builtin", "b", "Bravo");

    let library = Library::load(&tiers(&lib)).unwrap();
    let assembly = Assembler::new(&library).assemble(&["a", "blank", "b"]);
    assert_eq!(assembly.text, "Alpha\n\nBravo");
    assert_eq!(assembly.included, vec!["a", "blank", "b"]);
}

#[test]
fn duplicate_include_repeats_content() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("builtin", "a", "Alpha");

    let (text, warnings) = assemble(&["a", "a"], &tiers(&lib)).unwrap();
    assert_eq!(text, "Alpha\n\nAlpha");
    assert!(warnings.is_empty());
}

#[test]
fn unicode_is_preserved() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("builtin", "i18n", "Ünïcødé — 日本語 — emoji 🦀");

    let (text, _) = assemble(&["i18n"], &tiers(&lib)).unwrap();
    assert_eq!(text, "Ünïcødé — 日本語 — emoji 🦀");
}

#[test]
fn library_warnings_are_reported() {
    let lib = SnippetLibrary::new();
    lib.write_raw("builtin", "broken.md", "---\nname: x\n");
    lib.write_snippet("builtin", "a", "Alpha");

    let (text, warnings) = assemble(&["a"], &tiers(&lib)).unwrap();
    assert_eq!(text, "Alpha");
    assert!(matches!(warnings.as_slice(), [Warning::SnippetMetadata { .. }]));
}

#[test]
fn provenance_stamps_precede_bodies() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("workspace", "a", "Alpha");
    lib.write_raw("builtin", "empty.md", "---\nname: empty\n---\n");

    let library = Library::load(&tiers(&lib)).unwrap();
    let assembly = Assembler::new(&library)
        .with_provenance(true)
        .assemble(&["a", "empty"]);

    let a = &assembly.stamps[0];
    let empty = &assembly.stamps[1];
    assert_eq!(a.source, "workspace:a.md");
    assert_eq!(a.line, 7);
    assert_eq!(empty.source, "builtin:empty.md");
    assert_eq!(
        assembly.text,
        format!("{a}\nAlpha\n\n{empty}")
    );
}

#[test]
fn empty_include_reads_no_tiers() {
    let lib = SnippetLibrary::new();
    let gone = vec![Tier::new(lib.path("gone"), TierKind::Builtin)];

    let include: [&str; 0] = [];
    let (text, warnings) = assemble(&include, &gone).unwrap();
    assert_eq!(text, "");
    assert!(warnings.is_empty());
}

#[test]
fn unnamed_file_explains_missing_snippet() {
    let lib = SnippetLibrary::new();
    let plain = lib.write_raw("builtin", "base.md", "# Base\n\nNo front matter.");

    let (text, warnings) = assemble(&["base"], &tiers(&lib)).unwrap();
    assert_eq!(text, "");
    assert_eq!(
        warnings,
        vec![
            Warning::UnnamedSnippet { path: plain },
            Warning::SnippetNotFound {
                name: "base".into()
            },
        ]
    );
}
