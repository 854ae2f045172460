use super::*;
use crate::parse;

fn render(template: &str) -> String {
    let placeholders = parse(template);
    let rendered: String = segments(template, &placeholders)
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text.to_string(),
            Segment::Hole(p) => format!("<{}>", p.name),
        })
        .collect();
    rendered
}

#[test]
fn test_literals_and_holes_interleave() {
    assert_eq!(render("Hello {name}, you are {age:D2}!"), "Hello <name>, you are <age>!");
}

#[test]
fn test_escapes_collapse() {
    assert_eq!(render("{{literal}}"), "{literal}");
    assert_eq!(render("{{{a}}}"), "{<a>}");
}

#[test]
fn test_unterminated_tail_is_literal() {
    assert_eq!(render("Hello {arg1:0"), "Hello {arg1:0");
    assert_eq!(render("{a} {b"), "<a> {b");
}

#[test]
fn test_unescape_borrows_when_clean() {
    assert!(matches!(unescape("plain"), Cow::Borrowed("plain")));
}
