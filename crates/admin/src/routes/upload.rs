//! Multipart parsing for the create forms.

use std::collections::HashMap;

use axum::extract::Multipart;

use realtrust_data::ImageUpload;

use crate::error::{AppError, Result};

/// Largest accepted create request (image plus text fields).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Name of the file input on both create forms.
const IMAGE_FIELD: &str = "image";

/// Text fields plus the optional image from a create form.
#[derive(Debug, Default)]
pub struct CreateForm {
    fields: HashMap<String, String>,
    pub image: Option<ImageUpload>,
}

impl CreateForm {
    /// A text field, or empty when it was not sent.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Read every part of the body.
    ///
    /// An `image` part without a file name or bytes (no file chosen) counts
    /// as no image.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the body is not valid multipart,
    /// including bodies over [`MAX_UPLOAD_BYTES`].
    pub async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
            let name = field.name().unwrap_or_default().to_string();

            if name == IMAGE_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                form.image = ImageUpload::new(file_name, bytes.to_vec());
            } else {
                let value = field.text().await.map_err(bad_multipart)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    tracing::warn!(error = %e, "Rejected multipart body");
    AppError::BadRequest("Invalid multipart data".to_string())
}
