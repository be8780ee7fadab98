use crate::sanitize_filename;

#[test]
fn test_plain_name_is_kept() {
    assert_eq!(sanitize_filename("knee.png"), Some("knee.png".to_string()));
}

#[test]
fn test_directories_are_stripped() {
    assert_eq!(
        sanitize_filename("../../etc/knee.png"),
        Some("knee.png".to_string())
    );
    assert_eq!(
        sanitize_filename(r"C:\Users\pat\knee.jpg"),
        Some("knee.jpg".to_string())
    );
}

#[test]
fn test_unusable_names_are_rejected() {
    assert_eq!(sanitize_filename(""), None);
    assert_eq!(sanitize_filename(".."), None);
    assert_eq!(sanitize_filename("uploads/"), None);
    assert_eq!(sanitize_filename("   "), None);
}
