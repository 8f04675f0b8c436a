use pretty_assertions::assert_eq;

use super::*;
use lexis_ir::Token;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Kind {
    Word,
    Space,
    Comma,
}

/// Tokens of `"a b, c"`.
fn stream() -> Stream<Kind> {
    let mut stream = Stream::new(vec![
        Token::new("a", Kind::Word, 0),
        Token::new(" ", Kind::Space, 1),
        Token::new("b", Kind::Word, 2),
        Token::new(",", Kind::Comma, 3),
        Token::new(" ", Kind::Space, 4),
        Token::new("c", Kind::Word, 5),
    ]);
    stream.ignore(Kind::Space);
    stream
}

#[test]
fn default_options() {
    let scan = Scan::<Kind>::new(&[]);
    assert_eq!(scan.mode, Mode::Match);
    assert_eq!(scan.arity, Arity::All);
    assert!(!scan.advance);
    assert_eq!(scan.direction, Direction::Forward);
}

#[test]
fn setters_switch_one_option_each() {
    let scan = Scan::<Kind>::new(&[]).first().until().advancing().backward();
    assert_eq!(scan.mode, Mode::Until);
    assert_eq!(scan.arity, Arity::First);
    assert!(scan.advance);
    assert_eq!(scan.direction, Direction::Backward);
    assert!(!scan.moves_cursor());
}

#[test]
fn match_mode_returns_hit_indices_in_order() {
    let mut stream = stream();
    let hits = stream.scan(&Scan::new(&[Want::Kind(Kind::Word)]));
    // `a`, then `b` across the ignored space; `,` stops the scan.
    assert_eq!(hits, [0, 2]);
    assert_eq!(stream.position(), -1);
}

#[test]
fn until_mode_collects_ignored_kinds() {
    let mut stream = stream();
    let hits = stream.scan(&Scan::new(&[Want::Value("c")]).until().advancing());
    assert_eq!(hits, [0, 1, 2, 3, 4]);
    assert_eq!(stream.position(), 4);
}

#[test]
fn backward_scan_from_the_end() {
    let mut stream = stream();
    stream.scan(&Scan::new(&[]).advancing());
    assert_eq!(stream.position(), 6);

    let hits = stream.scan(&Scan::new(&[Want::Kind(Kind::Word)]).backward());
    assert_eq!(hits, [5]);
    let hits = stream.scan(&Scan::new(&[]).backward().first());
    assert_eq!(hits, [5]);
    assert_eq!(stream.position(), 6);
}

#[test]
fn backward_advancing_scan_never_moves_cursor() {
    let mut stream = stream();
    stream.scan(&Scan::new(&[Want::Kind(Kind::Word)]).first().advancing());
    stream.scan(&Scan::new(&[]).first().advancing());
    assert_eq!(stream.position(), 1);
    let hits = stream.scan(&Scan::new(&[]).backward().advancing());
    assert_eq!(hits, [0]);
    assert_eq!(stream.position(), 1);
}
