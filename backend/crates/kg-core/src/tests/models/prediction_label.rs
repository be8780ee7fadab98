use crate::{PredictionLabel, SeverityLabel};

#[test]
fn test_graded_label_uses_severity_name() {
    let label = PredictionLabel::from(SeverityLabel::Mild);

    assert_eq!(label.as_str(), "Mild");
    assert_eq!(label.severity(), Some(SeverityLabel::Mild));
}

#[test]
fn test_unknown_model_label() {
    let label = PredictionLabel::UnknownModel;

    assert_eq!(label.as_str(), "Unknown model selected");
    assert_eq!(label.severity(), None);
}
