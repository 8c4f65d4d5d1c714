use crate::UserId;

use std::str::FromStr;

#[test]
fn test_from_str_numeric() {
    assert_eq!(UserId::from_str("7").unwrap(), UserId::Number(7));
    assert_eq!(
        UserId::from_str("1704067200000").unwrap(),
        UserId::Number(1_704_067_200_000)
    );
}

#[test]
fn test_from_str_text() {
    assert_eq!(UserId::from_str("abc-1").unwrap(), UserId::Text("abc-1".into()));
}

#[test]
fn test_number_and_text_never_equal() {
    assert_ne!(UserId::Number(1), UserId::Text("1".into()));
}

#[test]
fn test_json_shape_preserved() {
    let number: UserId = serde_json::from_str("3").unwrap();
    let text: UserId = serde_json::from_str("\"3\"").unwrap();

    assert_eq!(number, UserId::Number(3));
    assert_eq!(text, UserId::Text("3".into()));
    assert_eq!(serde_json::to_string(&number).unwrap(), "3");
    assert_eq!(serde_json::to_string(&text).unwrap(), "\"3\"");
}

#[test]
fn test_display() {
    assert_eq!(UserId::Number(42).to_string(), "42");
    assert_eq!(UserId::Text("x".into()).to_string(), "x");
}
