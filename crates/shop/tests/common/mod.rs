use std::{path::Path, process::Command};

/// Create a new shop CLI command whose state lives under `home`.
pub fn shop(home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_shop"));
    command
        .env("HOME", home)
        .env("APPDATA", home)
        .env_remove("SHOPFRONT_API_URL")
        .env("NO_COLOR", "1");
    command
}
