//! The `init` command: write a default .hotenvrc.json.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Result;

use super::exit_status::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::report::print_notice;

pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    print_notice(
        &format!("Created {CONFIG_FILE_NAME}"),
        &mut io::stdout().lock(),
    );
    Ok(ExitStatus::Success)
}
