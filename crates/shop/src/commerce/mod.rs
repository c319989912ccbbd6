//! Storefront commands. Responses are rendered as returned by the server.

mod cart;
mod catalog;
mod orders;
mod request;
mod wishlist;

pub use cart::CartCommand;
pub use catalog::{CategoriesCommand, ProductsCommand};
pub use orders::OrdersCommand;
pub use request::RequestArgs;
pub use wishlist::WishlistCommand;
