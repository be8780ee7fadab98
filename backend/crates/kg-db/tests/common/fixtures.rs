use kg_core::{PredictionRecord, User};

use chrono::{Duration, Utc};

/// Creates a test User with a placeholder hash
pub fn create_test_user(username: &str) -> User {
    User {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        age: 30,
        gender: "F".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

/// Creates a PredictionRecord stamped `minutes_ago` minutes in the past
pub fn create_test_record(username: &str, image_name: &str, minutes_ago: i64) -> PredictionRecord {
    PredictionRecord {
        username: username.to_string(),
        image_name: image_name.to_string(),
        prediction: "Mild".to_string(),
        model_used: "VGG16".to_string(),
        predicted_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}
