//! Helpers shared by the tests of the shopfront crates.

mod api;
mod session;

pub use api::{
    REFRESH_PATH, authorized, mock_refresh, mock_refresh_delayed, mock_refresh_failure,
    start_api_mock, start_app_server,
};
pub use session::{TEST_CART_ID, logged_in_store, test_user};
