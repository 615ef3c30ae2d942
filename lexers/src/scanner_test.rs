use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::new("just a test buffer@".chars());
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('j'));
    assert_eq!(s.curr(), Some('j'));
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert_eq!(s.peek(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
}

#[test]
fn test_extract() {
    let mut s = Scanner::new("just a test buffer@".chars());
    for _ in 0..4 { assert!(s.next().is_some()); }
    assert_eq!(s.extract().iter().cloned().collect::<String>(), "just");
    assert_eq!(s.peek(), Some(' '));
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some(' '));
    for _ in 0..6 { assert!(s.next().is_some()); }
    assert_eq!(s.extract_string(), " a test");
    assert_eq!(s.next(), Some(' '));
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("heey  you!".chars());
    assert!(!s.skip_ws());
    assert_eq!(s.accept_any(&['h', 'e']), Some('h'));
    assert_eq!(s.curr(), Some('h'));
    assert_eq!(s.accept_any(&['y']), None);
    assert!(s.skip_all(|c| *c == 'e'));
    assert_eq!(s.curr(), Some('e'));
    assert_eq!(s.accept_if(|c| *c == 'y'), Some('y'));
    assert!(s.skip_ws());
    assert_eq!(s.curr(), Some(' '));
    assert_eq!(s.extract_string(), "heey  ");
}

#[test]
fn test_until() {
    let mut s = Scanner::new("abc)def".chars());
    assert!(s.until(|c| *c == ')'));
    assert_eq!(s.curr(), Some('c'));
    assert_eq!(s.extract_string(), "abc");
    assert!(!s.until(|c| *c == ')'));
    assert_eq!(s.accept_any(&[')']), Some(')'));
    s.ignore();
    assert!(s.until(|c| *c == ')'));
    assert_eq!(s.extract_string(), "def");
    assert_eq!(s.next(), None);
}

#[test]
fn test_backtrack() {
    let mut s = Scanner::new("xyz".chars());
    let backtrack = s.buffer_pos();
    assert_eq!(s.next(), Some('x'));
    assert_eq!(s.next(), Some('y'));
    assert!(s.set_buffer_pos(backtrack));
    assert_eq!(s.next(), Some('x'));
    assert!(!s.set_buffer_pos(10));
}

#[test]
fn test_skip_all() {
    let mut s = Scanner::new("   --x".chars());
    assert!(s.skip_all(|c| *c == ' '));
    assert_eq!(s.curr(), Some(' '));
    assert!(!s.skip_all(|c| *c == ' '));
    assert!(s.skip_all(|c| *c == '-'));
    assert_eq!(s.extract_string(), "   --");
    assert_eq!(s.next(), Some('x'));
}
