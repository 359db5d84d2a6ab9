use super::*;

#[test]
fn test_parse_comma_separated() {
    let skills = SkillSet::parse("Python, Machine Learning, SQL");
    assert_eq!(skills.len(), 4);
    assert!(skills.contains("python"));
    assert!(skills.contains("machine"));
    assert!(skills.contains("learning"));
    assert!(skills.contains("sql"));
}

#[test]
fn test_parse_mixed_separators() {
    let a = SkillSet::parse("rust;tokio, axum  serde");
    let b = SkillSet::parse("rust tokio axum serde");
    assert_eq!(a, b);
}

#[test]
fn test_parse_collapses_separator_runs() {
    let skills = SkillSet::parse("python,,;  ,ml");
    assert_eq!(skills.to_vec(), vec!["ml", "python"]);
}

#[test]
fn test_parse_lowercases_and_trims() {
    let skills = SkillSet::parse("  PyThOn  ");
    assert_eq!(skills.to_vec(), vec!["python"]);
}

#[test]
fn test_parse_empty_input() {
    assert!(SkillSet::parse("").is_empty());
    assert!(SkillSet::parse("   ").is_empty());
    assert!(SkillSet::parse(",;,").is_empty());
}

#[test]
fn test_parse_deduplicates() {
    let skills = SkillSet::parse("sql, SQL, sql");
    assert_eq!(skills.len(), 1);
}

#[test]
fn test_parse_is_idempotent_via_join() {
    for raw in [
        "Python, Machine Learning, SQL",
        "a;b;c",
        "  spaced   out tokens ",
        "",
        "one",
        "Dup, dup, DUP; dup",
    ] {
        let parsed = SkillSet::parse(raw);
        let reparsed = SkillSet::parse(&parsed.join());
        assert_eq!(parsed, reparsed, "idempotence broke for {raw:?}");
    }
}

#[test]
fn test_intersection() {
    let candidate = SkillSet::parse("python, ml, sql");
    let listing = SkillSet::parse("python, ml, docker");
    let shared = candidate.intersection(&listing);
    assert_eq!(shared.to_vec(), vec!["ml", "python"]);
}

#[test]
fn test_intersection_with_empty_set() {
    let candidate = SkillSet::parse("");
    let listing = SkillSet::parse("python, ml");
    assert!(candidate.intersection(&listing).is_empty());
    assert!(listing.intersection(&candidate).is_empty());
}

#[test]
fn test_iter_order_is_sorted() {
    let skills = SkillSet::parse("zig, ada, rust");
    let tokens: Vec<&str> = skills.iter().collect();
    assert_eq!(tokens, vec!["ada", "rust", "zig"]);
}
