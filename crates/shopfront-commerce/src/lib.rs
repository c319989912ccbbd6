#![doc = include_str!("../README.md")]

mod addresses;
pub mod admin;
mod cart;
mod catalog;
mod commerce_client;
mod orders;
mod reviews;
mod wishlist;

pub use addresses::AddressesClient;
pub use cart::{AddCartItemRequest, CartClient};
pub use catalog::{CategoriesClient, ProductQuery, ProductsClient};
pub use commerce_client::CommerceClientExt;
pub use orders::{CreateOrderRequest, OrdersClient};
pub use reviews::ReviewsClient;
pub use wishlist::WishlistClient;

/// Builds the path of a single resource, encoding the id.
pub(crate) fn item_path(collection: &str, id: impl std::fmt::Display) -> String {
    format!(
        "{collection}/{}",
        shopfront_api_base::urlencode(id.to_string())
    )
}
