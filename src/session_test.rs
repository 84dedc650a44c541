use super::*;

#[test]
fn generated_ids_are_nonempty() {
    let id = SessionId::generate();
    assert!(!id.as_str().is_empty());
}

#[test]
fn generated_ids_are_unique() {
    let a = SessionId::generate();
    let b = SessionId::generate();
    assert_ne!(a, b);
}

#[test]
fn display_matches_inner_value() {
    let id = SessionId::generate();
    assert_eq!(id.to_string(), id.as_str());
}
