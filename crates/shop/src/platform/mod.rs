use std::sync::Arc;

use clap::Subcommand;
use serde_json::json;
use shopfront_core::{Client, ClientSettings, Session};
use tracing::warn;

use crate::render::CommandResult;

pub(crate) mod state;

use state::{StateError, load_settings, save_settings};

#[derive(Subcommand, Clone)]
pub enum ConfigCommand {
    /// Show or set the storefront server.
    Server {
        #[arg(help = "Base URL of the storefront, e.g. https://shop.example.com")]
        base_url: Option<String>,

        #[arg(long, conflicts_with = "base_url", help = "Go back to the default server.")]
        reset: bool,
    },
}

impl ConfigCommand {
    pub fn run(self) -> CommandResult {
        match self {
            ConfigCommand::Server { base_url, reset } => {
                let mut settings = load_settings()?;

                if reset {
                    settings.server_url = None;
                    save_settings(&settings)?;
                    return Ok("Server reset to the default".into());
                }

                let Some(base_url) = base_url else {
                    return Ok(settings
                        .server_url
                        .unwrap_or_else(|| ClientSettings::default().base_url)
                        .into());
                };

                let base_url = base_url.trim().trim_end_matches('/').to_string();
                settings.server_url = Some(base_url.clone());
                save_settings(&settings)?;

                Ok(format!("Saved setting `server` to `{base_url}`").into())
            }
        }
    }
}

/// Resolve the client settings: the configured server, then the environment, then `--server`.
pub(crate) fn resolve_settings(server: Option<String>) -> Result<ClientSettings, StateError> {
    let mut settings = ClientSettings::default();
    if let Some(url) = load_settings()?.server_url {
        settings.base_url = url;
    }

    let mut settings = settings.with_env_overrides();
    if let Some(server) = server {
        settings.base_url = server.trim().trim_end_matches('/').to_string();
    }

    Ok(settings)
}

/// Build a client for the configured server, backed by the session file.
pub(crate) async fn build_client(server: Option<String>) -> Result<Client, StateError> {
    let settings = resolve_settings(server)?;
    let store = Arc::new(state::open_session_store().await?);

    Ok(Client::new_with_handler(
        Some(settings),
        store,
        Arc::new(|| warn!("Your session has expired, log in again with `shop login`")),
    ))
}

pub(crate) async fn status(client: Client) -> CommandResult {
    let server_url = client.internal.settings().base_url.clone();

    let status = match client.auth().session().await? {
        None => json!({
            "serverUrl": server_url,
            "status": "unauthenticated",
        }),
        Some(Session { user, cart_id, .. }) => json!({
            "serverUrl": server_url,
            "status": "authenticated",
            "username": user.username,
            "roles": user.roles(),
            "cartId": cart_id,
        }),
    };

    Ok(status.into())
}
