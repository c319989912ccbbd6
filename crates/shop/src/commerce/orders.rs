use clap::Subcommand;
use shopfront_commerce::{CommerceClientExt, CreateOrderRequest};
use shopfront_core::Client;

use crate::render::CommandResult;

#[derive(Subcommand, Clone)]
pub enum OrdersCommand {
    /// Show the order history.
    List,
    /// Show a single order.
    Get { id: i64 },
    /// Order the content of the cart.
    Create {
        #[arg(long, help = "Id of the shipping address.")]
        address: i64,
        #[arg(long, default_value = "COD")]
        payment_method: String,
        #[arg(long)]
        notes: Option<String>,
    },
}

impl OrdersCommand {
    pub async fn run(self, client: Client) -> CommandResult {
        let orders = client.orders();

        Ok(match self {
            OrdersCommand::List => orders.history().await?,
            OrdersCommand::Get { id } => orders.get(id).await?,
            OrdersCommand::Create {
                address,
                payment_method,
                notes,
            } => {
                orders
                    .create(&CreateOrderRequest {
                        shipping_address_id: address,
                        payment_method,
                        notes,
                    })
                    .await?
            }
        }
        .into())
    }
}
