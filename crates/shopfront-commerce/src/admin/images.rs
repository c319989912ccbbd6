use serde_json::Value;
use shopfront_core::{ApiError, Client, FilePart};

use crate::item_path;

/// Images attached to one product.
#[derive(Clone)]
pub struct ProductImagesClient {
    client: Client,
    path: String,
}

impl ProductImagesClient {
    pub(crate) fn new(client: Client, path: String) -> Self {
        Self { client, path }
    }

    #[allow(missing_docs)]
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.get(&self.path).await
    }

    /// Upload an image, usually a [`FilePart::file`] with its MIME type set.
    pub async fn upload(&self, image: FilePart) -> Result<Value, ApiError> {
        self.client.upload(&self.path, vec![image]).await
    }

    #[allow(missing_docs)]
    pub async fn delete(&self, image_id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.delete(&item_path(&self.path, image_id)).await
    }
}
