use std::{fs, path::Path};

use anyhow::Result;

use super::CommandOutcome;
use crate::config;

pub fn init() -> Result<CommandOutcome> {
    let config_path = Path::new(config::CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config::CONFIG_FILE_NAME);
    }

    fs::write(config_path, config::default_config_json()?)?;
    Ok(CommandOutcome {
        notes: vec![format!("created {}", config::CONFIG_FILE_NAME)],
        ..Default::default()
    })
}
