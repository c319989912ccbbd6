use color_eyre::eyre::{Result, bail};
use shopfront_cli::{password_prompt_when_none, text_prompt_when_none};
use shopfront_core::{
    Client,
    auth::{LoginError, LoginRequest, RegisterRequest},
};
use tracing::debug;

use super::{LoginArgs, RegisterArgs};
use crate::render::CommandResult;

/// Fail instead of prompting when prompts are disabled.
fn required(name: &str, value: Option<String>, nointeraction: bool) -> Result<Option<String>> {
    if value.is_none() && nointeraction {
        bail!("Missing `--{name}`, prompts are disabled by `--nointeraction`");
    }
    Ok(value)
}

impl LoginArgs {
    pub async fn run(self, client: Client, nointeraction: bool) -> CommandResult {
        let username = text_prompt_when_none(
            "Username",
            required("username", self.username, nointeraction)?,
        )?;
        let password = password_prompt_when_none(
            "Password",
            required("password", self.password, nointeraction)?,
        )?;

        let session = match client
            .auth()
            .login(&LoginRequest { username, password })
            .await
        {
            Ok(session) => session,
            Err(LoginError::InvalidCredentials) => bail!("Invalid username or password"),
            Err(e) => return Err(e.into()),
        };
        debug!(cart_id = ?session.cart_id, "Session stored");

        Ok(format!("Logged in as {}", session.user.username).into())
    }
}

impl RegisterArgs {
    pub async fn run(self, client: Client, nointeraction: bool) -> CommandResult {
        let username = text_prompt_when_none(
            "Username",
            required("username", self.username, nointeraction)?,
        )?;
        let email = text_prompt_when_none("Email", required("email", self.email, nointeraction)?)?;
        let password = password_prompt_when_none(
            "Password",
            required("password", self.password, nointeraction)?,
        )?;

        client
            .auth()
            .register(&RegisterRequest {
                username: username.clone(),
                email,
                password,
                full_name: self.full_name,
            })
            .await?;

        Ok(format!("Registered {username}, you can now log in with `shop login`").into())
    }
}
