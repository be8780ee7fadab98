use crate::{CoreError, ModelKind};

use std::str::FromStr;

#[test]
fn test_model_kind_from_form_value() {
    assert_eq!(ModelKind::from_str("VGG16").unwrap(), ModelKind::Vgg16);
    assert_eq!(
        ModelKind::from_str("MobileNetV2").unwrap(),
        ModelKind::MobileNetV2
    );
}

#[test]
fn test_model_kind_is_case_sensitive() {
    let result = ModelKind::from_str("vgg16");

    assert!(matches!(result, Err(CoreError::InvalidModelKind { .. })));
}

#[test]
fn test_model_kind_as_str_round_trips() {
    for kind in [ModelKind::Vgg16, ModelKind::MobileNetV2] {
        assert_eq!(ModelKind::from_str(kind.as_str()).unwrap(), kind);
    }
}
