//! Back-office operations, reserved to users holding `ROLE_ADMIN`.

mod images;
mod orders;
mod resource;

pub use images::ProductImagesClient;
pub use orders::AdminOrdersClient;
pub use resource::AdminResource;
use shopfront_core::Client;

use crate::item_path;

const ADMIN: &str = "/api/admin";

/// Subclient containing the back-office resources.
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
}

impl AdminClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn resource(&self, path: String) -> AdminResource {
        AdminResource::new(self.client.clone(), path)
    }

    /// User accounts.
    pub fn users(&self) -> AdminResource {
        self.resource(format!("{ADMIN}/users"))
    }

    /// The product catalog.
    pub fn products(&self) -> AdminResource {
        self.resource(format!("{ADMIN}/products"))
    }

    /// Product categories.
    pub fn categories(&self) -> AdminResource {
        self.resource(format!("{ADMIN}/categories"))
    }

    /// Promotions and discount codes.
    pub fn promotions(&self) -> AdminResource {
        self.resource(format!("{ADMIN}/promotions"))
    }

    /// Roles that can be granted to users.
    pub fn roles(&self) -> AdminResource {
        self.resource(format!("{ADMIN}/roles"))
    }

    /// Variants (size, color, stock) of one product.
    pub fn variants(&self, product_id: impl std::fmt::Display) -> AdminResource {
        self.resource(format!(
            "{}/variants",
            item_path(&format!("{ADMIN}/products"), product_id)
        ))
    }

    /// Images of one product.
    pub fn images(&self, product_id: impl std::fmt::Display) -> ProductImagesClient {
        ProductImagesClient::new(
            self.client.clone(),
            format!(
                "{}/images",
                item_path(&format!("{ADMIN}/products"), product_id)
            ),
        )
    }

    /// Orders of every user.
    pub fn orders(&self) -> AdminOrdersClient {
        AdminOrdersClient::new(self.client.clone())
    }
}
