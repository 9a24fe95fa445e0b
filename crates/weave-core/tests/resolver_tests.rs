use pretty_assertions::assert_eq;
use weave_core::{Assembler, Error, Library, Resolution, Tier, TierKind, Warning, resolve};
use weave_test_utils::SnippetLibrary;

fn three_tiers(lib: &SnippetLibrary) -> Vec<Tier> {
    vec![
        Tier::new(lib.tier("workspace"), TierKind::Workspace),
        Tier::new(lib.tier("user"), TierKind::User),
        Tier::new(lib.tier("builtin"), TierKind::Builtin),
    ]
}

fn body_of(resolution: &Resolution) -> &str {
    resolution.snippet().map(|s| s.body.as_str()).unwrap_or("<not found>")
}

#[test]
fn finds_builtin() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("builtin", "base", "Base content");

    let resolved = resolve("base", &three_tiers(&lib)).unwrap();
    assert_eq!(body_of(&resolved.resolution), "Base content");
    assert_eq!(resolved.resolution.snippet().unwrap().tier, TierKind::Builtin);
}

#[test]
fn workspace_overrides_builtin() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("builtin", "base", "Builtin content");
    lib.write_snippet("workspace", "base", "Workspace content");

    let resolved = resolve("base", &three_tiers(&lib)).unwrap();
    assert_eq!(body_of(&resolved.resolution), "Workspace content");
}

#[test]
fn three_tier_priority() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("workspace", "base", "Workspace version");
    lib.write_snippet("user", "base", "User version");
    lib.write_snippet("builtin", "base", "Builtin version");
    let tiers = three_tiers(&lib);

    let body = |tiers: &[Tier]| resolve("base", tiers).unwrap().resolution.into_snippet().unwrap().body;
    assert_eq!(body(&tiers), "Workspace version");
    assert_eq!(body(&tiers[1..]), "User version");
    assert_eq!(body(&tiers[2..]), "Builtin version");
}

#[test]
fn precedence_follows_list_order_not_kind() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("workspace", "base", "Workspace version");
    lib.write_snippet("builtin", "base", "Builtin version");
    let tiers = vec![
        Tier::new(lib.tier("builtin"), TierKind::Builtin),
        Tier::new(lib.tier("workspace"), TierKind::Workspace),
    ];

    let resolved = resolve("base", &tiers).unwrap();
    assert_eq!(body_of(&resolved.resolution), "Builtin version");
}

#[test]
fn matches_metadata_name_not_file_name() {
    let lib = SnippetLibrary::new();
    lib.write_named("builtin", "01-python.md", "python-style", "Use type hints.");

    let tiers = three_tiers(&lib);
    let by_name = resolve("python-style", &tiers).unwrap();
    assert_eq!(body_of(&by_name.resolution), "Use type hints.");

    let by_file = resolve("01-python", &tiers).unwrap();
    assert_eq!(by_file.resolution, Resolution::NotFound("01-python".into()));
}

#[test]
fn missing_returns_not_found() {
    let lib = SnippetLibrary::new();
    let resolved = resolve("nonexistent", &three_tiers(&lib)).unwrap();
    assert_eq!(resolved.resolution, Resolution::NotFound("nonexistent".into()));
    assert!(resolved.warnings.is_empty());
}

#[test]
fn empty_tier_list_returns_not_found() {
    let resolved = resolve("anything", &[]).unwrap();
    assert!(resolved.resolution.snippet().is_none());
}

#[test]
fn missing_optional_tier_is_skipped() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("builtin", "base", "Found");
    let tiers = vec![
        Tier::optional(lib.path("does_not_exist"), TierKind::Workspace),
        Tier::new(lib.tier("builtin"), TierKind::Builtin),
    ];

    let resolved = resolve("base", &tiers).unwrap();
    assert_eq!(body_of(&resolved.resolution), "Found");
}

#[test]
fn missing_required_tier_is_fatal() {
    let lib = SnippetLibrary::new();
    let tiers = vec![Tier::new(lib.path("does_not_exist"), TierKind::Builtin)];

    let err = resolve("base", &tiers).unwrap_err();
    assert!(matches!(err, Error::TierNotFound { path } if path.ends_with("does_not_exist")));
}

#[test]
fn missing_required_lower_tier_is_fatal_even_after_match() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("workspace", "base", "Workspace");
    let tiers = vec![
        Tier::new(lib.tier("workspace"), TierKind::Workspace),
        Tier::new(lib.path("gone"), TierKind::Builtin),
    ];

    let err = resolve("base", &tiers).unwrap_err();
    assert!(matches!(err, Error::TierNotFound { path } if path.ends_with("gone")));
}

#[test]
fn resolve_agrees_with_assembler() {
    let lib = SnippetLibrary::new();
    lib.write_snippet("workspace", "base", "Workspace");
    lib.write_snippet("builtin", "base", "Builtin");
    lib.write_snippet("builtin", "rust", "Rust");
    let tiers = three_tiers(&lib);

    let library = Library::load(&tiers).unwrap();
    let assembly = Assembler::new(&library).assemble(&["base", "rust"]);

    let resolved: Vec<String> = ["base", "rust"]
        .iter()
        .map(|name| body_of(&resolve(name, &tiers).unwrap().resolution).to_string())
        .collect();
    assert_eq!(assembly.text, resolved.join("\n\n"));
}

#[test]
fn duplicate_in_tier_first_filename_wins_with_warning() {
    let lib = SnippetLibrary::new();
    let kept = lib.write_named("builtin", "a-base.md", "base", "From a");
    let ignored = lib.write_named("builtin", "b-base.md", "base", "From b");

    let resolved = resolve("base", &three_tiers(&lib)).unwrap();
    assert_eq!(body_of(&resolved.resolution), "From a");
    assert_eq!(
        resolved.warnings,
        vec![Warning::DuplicateSnippet {
            name: "base".into(),
            kept,
            ignored,
        }]
    );
}

#[test]
fn malformed_file_is_warning_not_failure() {
    let lib = SnippetLibrary::new();
    let broken = lib.write_raw("builtin", "broken.md", "---\nname: [oops\n---\nBody");
    lib.write_snippet("builtin", "base", "Fine");

    let resolved = resolve("base", &three_tiers(&lib)).unwrap();
    assert_eq!(body_of(&resolved.resolution), "Fine");
    assert!(matches!(
        resolved.warnings.as_slice(),
        [Warning::SnippetMetadata { path, .. }] if *path == broken
    ));
}

#[test]
fn snippet_with_empty_body() {
    let lib = SnippetLibrary::new();
    lib.write_raw("builtin", "empty.md", "---\nname: empty\n---\n");

    let resolved = resolve("empty", &three_tiers(&lib)).unwrap();
    assert_eq!(body_of(&resolved.resolution), "");
}

#[test]
fn snippet_without_front_matter_is_not_resolvable() {
    let lib = SnippetLibrary::new();
    lib.write_raw("builtin", "plain.md", "Just markdown\n\nNo front matter.");

    let resolved = resolve("plain", &three_tiers(&lib)).unwrap();
    assert!(resolved.resolution.snippet().is_none());
    assert_eq!(
        resolved.warnings,
        vec![Warning::UnnamedSnippet {
            path: lib.tier("builtin").join("plain.md")
        }]
    );
}

#[test]
fn metadata_is_carried_through() {
    let lib = SnippetLibrary::new();
    lib.write_raw(
        "builtin",
        "rust.md",
        "---\nname: rust\ndescription: Rust rules\ntags: [rust, style]\nversion: 7\n---\n\nPrefer ?.\n",
    );

    let snippet = resolve("rust", &three_tiers(&lib))
        .unwrap()
        .resolution
        .into_snippet()
        .unwrap();
    assert_eq!(snippet.description.as_deref(), Some("Rust rules"));
    assert_eq!(snippet.tags, vec!["rust", "style"]);
    assert_eq!(snippet.version, Some(7));
    assert_eq!(snippet.body, "Prefer ?.\n");
    assert_eq!(snippet.body_line, 8);
    assert_eq!(snippet.source, "builtin:rust.md");
}

#[test]
fn byte_order_mark_does_not_hide_front_matter() {
    let lib = SnippetLibrary::new();
    lib.write_raw("builtin", "bom.md", "\u{feff}---\nname: bom\n---\nBody");

    let resolved = resolve("bom", &three_tiers(&lib)).unwrap();
    assert_eq!(body_of(&resolved.resolution), "Body");
    assert!(resolved.warnings.is_empty());
}
