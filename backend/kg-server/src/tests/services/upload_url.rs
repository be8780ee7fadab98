use crate::upload_url;

#[test]
fn test_plain_name_is_unchanged() {
    assert_eq!(upload_url("knee-01_a.png"), "/static/tests/knee-01_a.png");
}

#[test]
fn test_url_delimiters_are_escaped() {
    assert_eq!(upload_url("x#1.png"), "/static/tests/x%231.png");
    assert_eq!(upload_url("a?b.png"), "/static/tests/a%3Fb.png");
    assert_eq!(upload_url("left knee.png"), "/static/tests/left%20knee.png");
}

#[test]
fn test_non_ascii_is_utf8_escaped() {
    assert_eq!(upload_url("é.png"), "/static/tests/%C3%A9.png");
}
