use clap::Subcommand;
use shopfront_commerce::{AddCartItemRequest, CommerceClientExt};
use shopfront_core::Client;

use crate::render::CommandResult;

#[derive(Subcommand, Clone)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product variant to the cart.
    Add {
        variant_id: i64,
        #[arg(short = 'n', long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove an item from the cart.
    Remove { item_id: i64 },
    /// Change the quantity of an item.
    Update { item_id: i64, quantity: u32 },
    /// Remove every item.
    Clear,
}

impl CartCommand {
    pub async fn run(self, client: Client) -> CommandResult {
        let cart = client.cart();

        Ok(match self {
            CartCommand::Show => cart.get().await?,
            CartCommand::Add {
                variant_id,
                quantity,
            } => {
                cart.add_item(&AddCartItemRequest {
                    product_variant_id: variant_id,
                    quantity,
                })
                .await?
            }
            CartCommand::Remove { item_id } => cart.remove_item(item_id).await?,
            CartCommand::Update { item_id, quantity } => {
                cart.update_quantity(item_id, quantity).await?
            }
            CartCommand::Clear => cart.clear().await?,
        }
        .into())
    }
}
