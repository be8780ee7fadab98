use crate::ApiResult;
use crate::services::prediction_service::UploadedImage;

use axum::extract::Multipart;

pub const IMAGE_FIELD: &str = "my_image";
pub const MODEL_FIELD: &str = "model";
pub const USERNAME_FIELD: &str = "username";

/// Fields of the upload form, each optional until the service checks them
#[derive(Debug, Default)]
pub struct SubmitForm {
    pub image: Option<UploadedImage>,
    pub model: Option<String>,
    pub username: Option<String>,
}

impl SubmitForm {
    /// Drain a multipart body. Unknown fields are skipped; a repeated field
    /// keeps its last value.
    pub async fn from_multipart(mut multipart: Multipart) -> ApiResult<Self> {
        let mut form = SubmitForm::default();

        while let Some(field) = multipart.next_field().await? {
            match field.name() {
                Some(IMAGE_FIELD) => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    form.image = Some(UploadedImage {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
                Some(MODEL_FIELD) => form.model = Some(field.text().await?),
                Some(USERNAME_FIELD) => form.username = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }
}
