use shopfront_core::Client;

use crate::render::CommandResult;

pub(crate) async fn logout(client: Client) -> CommandResult {
    if !client.auth().is_authenticated().await? {
        return Ok("You are not logged in".into());
    }

    client.auth().logout().await?;
    Ok("You have logged out".into())
}
