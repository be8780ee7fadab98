use kg_classifier::KneeClassifier;

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared, read-only state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Both knee models, loaded once at startup
    pub classifier: Arc<KneeClassifier>,
    /// Where uploaded images are written and served from
    pub upload_dir: PathBuf,
}
