use sitelist_core::{DedupeOutcome, ParsedPair, SeenKeys};

fn pair(name: &str, url: &str) -> ParsedPair {
    ParsedPair {
        name: name.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn fresh_pairs_are_accepted_and_recorded() {
    let mut seen = SeenKeys::new();
    assert_eq!(seen.admit(&pair("a", "http://a")), DedupeOutcome::Accepted);
    assert_eq!(seen.admit(&pair("b", "http://b")), DedupeOutcome::Accepted);
}

#[test]
fn repeated_name_is_rejected_even_with_a_new_url() {
    let mut seen = SeenKeys::new();
    seen.admit(&pair("a", "http://a"));
    assert_eq!(
        seen.admit(&pair("a", "http://elsewhere")),
        DedupeOutcome::DuplicateName
    );
}

#[test]
fn repeated_url_is_rejected_even_with_a_new_name() {
    let mut seen = SeenKeys::new();
    seen.admit(&pair("a", "http://a"));
    assert_eq!(
        seen.admit(&pair("b", "http://a")),
        DedupeOutcome::DuplicateUrl
    );
}

#[test]
fn pair_colliding_on_both_keys_reports_the_name() {
    let mut seen = SeenKeys::new();
    seen.admit(&pair("a", "http://a"));
    assert_eq!(
        seen.admit(&pair("a", "http://a")),
        DedupeOutcome::DuplicateName
    );
}

#[test]
fn rejected_pairs_do_not_grow_the_key_sets() {
    let mut seen = SeenKeys::new();
    seen.admit(&pair("a", "http://a"));
    // Rejected for its name; its url must stay available to later pairs.
    seen.admit(&pair("a", "http://b"));
    assert_eq!(seen.admit(&pair("c", "http://b")), DedupeOutcome::Accepted);
}
