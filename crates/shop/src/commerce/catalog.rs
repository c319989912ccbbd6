use clap::Subcommand;
use shopfront_commerce::{CommerceClientExt, ProductQuery};
use shopfront_core::Client;

use crate::render::CommandResult;

#[derive(Subcommand, Clone)]
pub enum ProductsCommand {
    /// Search the catalog.
    List {
        #[arg(long, help = "Only products whose name contains this text.")]
        name: Option<String>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        min_price: Option<u64>,
        #[arg(long)]
        max_price: Option<u64>,
        #[arg(long, help = "Zero based page number.")]
        page: Option<u32>,
        #[arg(long, help = "Page size.")]
        size: Option<u32>,
    },
    /// Show a single product.
    Get { id: i64 },
}

impl ProductsCommand {
    pub async fn run(self, client: Client) -> CommandResult {
        let products = client.products();

        Ok(match self {
            ProductsCommand::List {
                name,
                category,
                min_price,
                max_price,
                page,
                size,
            } => {
                products
                    .list(&ProductQuery {
                        name,
                        category_id: category,
                        min_price,
                        max_price,
                        page,
                        size,
                    })
                    .await?
            }
            ProductsCommand::Get { id } => products.get(id).await?,
        }
        .into())
    }
}

#[derive(Subcommand, Clone)]
pub enum CategoriesCommand {
    /// List every category.
    List,
    /// Show a single category.
    Get { id: i64 },
}

impl CategoriesCommand {
    pub async fn run(self, client: Client) -> CommandResult {
        let categories = client.categories();

        Ok(match self {
            CategoriesCommand::List => categories.list().await?,
            CategoriesCommand::Get { id } => categories.get(id).await?,
        }
        .into())
    }
}
