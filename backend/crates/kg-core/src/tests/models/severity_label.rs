use crate::SeverityLabel;

use std::str::FromStr;

#[test]
fn test_severity_label_from_class_index() {
    assert_eq!(SeverityLabel::from_index(0), Some(SeverityLabel::Normal));
    assert_eq!(SeverityLabel::from_index(1), Some(SeverityLabel::Doubtful));
    assert_eq!(SeverityLabel::from_index(2), Some(SeverityLabel::Mild));
    assert_eq!(SeverityLabel::from_index(3), Some(SeverityLabel::Moderate));
    assert_eq!(SeverityLabel::from_index(4), Some(SeverityLabel::Severe));
}

#[test]
fn test_severity_label_index_out_of_range() {
    assert_eq!(SeverityLabel::from_index(5), None);
}

#[test]
fn test_severity_label_parses_display_names() {
    assert_eq!(
        SeverityLabel::from_str("Moderate").unwrap(),
        SeverityLabel::Moderate
    );
    assert!(SeverityLabel::from_str("moderate").is_err());
}
