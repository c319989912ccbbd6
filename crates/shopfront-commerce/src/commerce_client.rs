use shopfront_core::Client;

use crate::{
    AddressesClient, CartClient, CategoriesClient, OrdersClient, ProductsClient, ReviewsClient,
    WishlistClient, admin::AdminClient,
};

/// Access to the storefront and back-office subclients from a [`Client`].
pub trait CommerceClientExt {
    /// Product catalog.
    fn products(&self) -> ProductsClient;
    /// Product categories.
    fn categories(&self) -> CategoriesClient;
    /// The logged in user's cart.
    fn cart(&self) -> CartClient;
    /// Orders of the logged in user.
    fn orders(&self) -> OrdersClient;
    /// Wishlisted product variants.
    fn wishlist(&self) -> WishlistClient;
    /// Product reviews.
    fn reviews(&self) -> ReviewsClient;
    /// Shipping addresses.
    fn addresses(&self) -> AddressesClient;
    /// Back-office operations. The server rejects them with
    /// [`AccessDenied`](shopfront_core::ApiError::AccessDenied) unless the user is an admin.
    fn admin(&self) -> AdminClient;
}

impl CommerceClientExt for Client {
    fn products(&self) -> ProductsClient {
        ProductsClient {
            client: self.clone(),
        }
    }

    fn categories(&self) -> CategoriesClient {
        CategoriesClient {
            client: self.clone(),
        }
    }

    fn cart(&self) -> CartClient {
        CartClient {
            client: self.clone(),
        }
    }

    fn orders(&self) -> OrdersClient {
        OrdersClient {
            client: self.clone(),
        }
    }

    fn wishlist(&self) -> WishlistClient {
        WishlistClient {
            client: self.clone(),
        }
    }

    fn reviews(&self) -> ReviewsClient {
        ReviewsClient {
            client: self.clone(),
        }
    }

    fn addresses(&self) -> AddressesClient {
        AddressesClient {
            client: self.clone(),
        }
    }

    fn admin(&self) -> AdminClient {
        AdminClient::new(self.clone())
    }
}
