use clap::{Parser, Subcommand};
use shopfront_cli::Color;

use crate::{
    auth::{LoginArgs, RegisterArgs},
    commerce::{
        CartCommand, CategoriesCommand, OrdersCommand, ProductsCommand, RequestArgs,
        WishlistCommand,
    },
    platform::ConfigCommand,
    render::Output,
};

#[derive(Parser, Clone)]
#[command(name = "Shopfront CLI", bin_name = "shop", version, about = "Shopfront CLI", long_about = None, disable_version_flag = true)]
pub struct Cli {
    // Optional as a workaround for https://github.com/clap-rs/clap/issues/3572
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'o', long, global = true, value_enum, default_value_t = Output::JSON)]
    pub output: Output,

    #[arg(short = 'c', long, global = true, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    #[arg(
        short = 's',
        long,
        global = true,
        help = "Server URL, overriding the configured one for this invocation."
    )]
    pub server: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Exit with a success exit code (0) unless an error is thrown."
    )]
    pub cleanexit: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        help = "Don't return anything to stdout."
    )]
    pub quiet: bool,

    #[arg(
        long,
        global = true,
        help = "Do not prompt for interactive user input."
    )]
    pub nointeraction: bool,

    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    pub version: (),
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    // Auth commands
    #[command(long_about = "Log into a user account.")]
    Login(LoginArgs),

    #[command(long_about = "Log out of the current user account.")]
    Logout,

    #[command(long_about = "Register a new user account.")]
    Register(RegisterArgs),

    // Platform commands
    #[command(long_about = "Configure CLI settings.")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(long_about = "Generate shell completions.")]
    Completion {
        #[arg(long, help = "The shell to generate completions for.")]
        shell: Option<clap_complete::Shell>,
    },

    #[command(
        long_about = "Show the server and the logged in user.",
        after_help = r#"Example return value:
  {
    "serverUrl": "http://localhost:8080",
    "status": "authenticated",
    "username": "alice",
    "roles": ["ROLE_USER"],
    "cartId": "7"
  }

Notes:
  `status` is one of:
    - `unauthenticated` when you are not logged in
    - `authenticated` when a session is stored
"#
    )]
    Status,

    // Storefront commands
    #[command(long_about = "Browse the product catalog.")]
    Products {
        #[command(subcommand)]
        command: ProductsCommand,
    },

    #[command(long_about = "Browse the product categories.")]
    Categories {
        #[command(subcommand)]
        command: CategoriesCommand,
    },

    #[command(long_about = "Manage your cart.")]
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },

    #[command(long_about = "Place and review orders.")]
    Orders {
        #[command(subcommand)]
        command: OrdersCommand,
    },

    #[command(long_about = "Manage your wishlist.")]
    Wishlist {
        #[command(subcommand)]
        command: WishlistCommand,
    },

    #[command(long_about = "Send an authenticated request to any API path.")]
    Request(RequestArgs),
}
