use clap::Subcommand;
use shopfront_commerce::CommerceClientExt;
use shopfront_core::Client;

use crate::render::CommandResult;

#[derive(Subcommand, Clone)]
pub enum WishlistCommand {
    /// Show the wishlist.
    List,
    /// Add a product variant.
    Add { variant_id: i64 },
    /// Remove a product variant.
    Remove { variant_id: i64 },
}

impl WishlistCommand {
    pub async fn run(self, client: Client) -> CommandResult {
        let wishlist = client.wishlist();

        Ok(match self {
            WishlistCommand::List => wishlist.list().await?,
            WishlistCommand::Add { variant_id } => wishlist.add(variant_id).await?,
            WishlistCommand::Remove { variant_id } => wishlist.remove(variant_id).await?,
        }
        .into())
    }
}
