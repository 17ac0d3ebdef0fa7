use super::log::load_config;
use crate::{
    libs::{messages::Message, view::View},
    msg_print, msg_warning,
};
use anyhow::Result;
use std::path::PathBuf;

pub fn cmd(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;

    if config.map.project.is_empty() {
        msg_warning!(Message::ConfigNoProjects);
        return Ok(());
    }

    msg_print!(Message::ProjectsHeader, true);
    View::projects(&config);
    Ok(())
}
