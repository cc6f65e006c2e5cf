use contracts::uploads::UploadData;
use reqwest::multipart::{Form, Part};

use crate::{bearer, ApiClient, ApiError};

impl ApiClient {
    /// Upload one media file and return the URLs the backend stored it
    /// under (relative to its static root).
    pub async fn upload(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
        token: &str,
    ) -> Result<Vec<String>, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| ApiError::Rejected(format!("Unsupported file type: {e}")))?;

        let form = Form::new().part("files", part);

        let data: UploadData = self
            .expect_data(
                self.http
                    .post(self.url("/upload/"))
                    .header("Authorization", bearer(token))
                    .multipart(form),
                "Error uploading file",
            )
            .await?;

        Ok(data.urls)
    }
}
