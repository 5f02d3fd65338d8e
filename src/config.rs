use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Site {
    pub title: String,
    pub url: String,
    pub description: String,
    pub author: String,
}

#[derive(Deserialize)]
pub struct Defaults {
    pub page_size: u32,
    pub related_limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct Build {
    pub production: bool,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub site: Site,
    pub defaults: Defaults,
    pub build: Build,
    pub log: Option<Log>,
}

pub const DEFAULT_RELATED_LIMIT: usize = 3;

pub fn read_config(cfg_path: &PathBuf) -> Result<Config> {
    let cfg_content = fs::read_to_string(cfg_path)
        .with_context(|| format!("Error opening configuration file {}", cfg_path.display()))?;

    let cfg: Config = toml::from_str(cfg_content.as_str())
        .context("Error parsing configuration file")?;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r##"
[site]
title = "My blog"
url = "https://example.com"
description = "Notes and projects"
author = "someone"

[defaults]
page_size = 10

[build]
production = true

[log]
level = "Info"
log_to_console = true
"##;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.site.title, "My blog");
        assert_eq!(cfg.defaults.page_size, 10);
        assert_eq!(cfg.defaults.related_limit, None);
        assert!(cfg.build.production);
        assert!(cfg.log.unwrap().log_to_console);
    }
}
