use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    /// Delimited source file read once before the listener binds.
    pub source_path: PathBuf,
    /// Directory of static frontend assets; unknown paths fall back to its
    /// `index.html` so the single-page frontend owns client-side routing.
    pub static_dir: PathBuf,
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("tokenization_digital_wallet.csv"),
            static_dir: PathBuf::from("frontend"),
            max_body_bytes: 16 * 1024,
        }
    }
}
