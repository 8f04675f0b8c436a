use pretty_assertions::assert_eq;

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Kind {
    Num,
    Ws,
}

#[test]
fn rules_keep_declaration_order() {
    let set = PatternSet::new()
        .rule(Kind::Ws, r"\s+")
        .rule(Kind::Num, "[0-9]+")
        .rule(Kind::Ws, "\t");
    let rules: Vec<_> = set.iter().collect();
    assert_eq!(
        rules,
        [(&Kind::Ws, r"\s+"), (&Kind::Num, "[0-9]+"), (&Kind::Ws, "\t")]
    );
    assert_eq!(set.len(), 3);
}

#[test]
fn from_array_and_iterator_agree() {
    let from_array = PatternSet::from([(Kind::Num, "[0-9]+"), (Kind::Ws, " ")]);
    let collected: PatternSet<Kind> = [("[0-9]+", Kind::Num), (" ", Kind::Ws)]
        .into_iter()
        .map(|(pattern, kind)| (kind, pattern.to_owned()))
        .collect();
    assert_eq!(from_array, collected);
}

#[test]
fn untyped_has_one_unit_rule() {
    let set = PatternSet::untyped(r"\w+");
    assert_eq!(set.iter().collect::<Vec<_>>(), [(&(), r"\w+")]);
}

#[test]
fn default_is_empty() {
    let mut set = PatternSet::<Kind>::default();
    assert!(set.is_empty());
    set.push(Kind::Num, "1");
    assert!(!set.is_empty());
}
