use clap::Args;

pub(crate) mod login;
pub(crate) mod logout;

#[derive(Args, Clone)]
pub struct LoginArgs {
    #[arg(short = 'u', long, help = "Username")]
    pub username: Option<String>,

    #[arg(long, env = "SHOP_PASSWORD", hide_env_values = true, help = "Password")]
    pub password: Option<String>,
}

#[derive(Args, Clone)]
pub struct RegisterArgs {
    #[arg(short = 'u', long, help = "Username")]
    pub username: Option<String>,

    #[arg(short = 'e', long, help = "Email address")]
    pub email: Option<String>,

    #[arg(long, help = "Full name")]
    pub full_name: Option<String>,

    #[arg(long, env = "SHOP_PASSWORD", hide_env_values = true, help = "Password")]
    pub password: Option<String>,
}
