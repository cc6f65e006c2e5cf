use serde::{Deserialize, Serialize};

/// Upload endpoint response data: one URL per stored file, relative to the
/// backend's static root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadData {
    pub urls: Vec<String>,
}
