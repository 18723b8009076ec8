//! `config show`, `config set`.

use std::path::Path;

use anyhow::Result;

use crate::config::ClientConfig;

/// Tokens are shown by their last four characters only.
fn mask(token: &str) -> String {
    if token.is_empty() {
        return "(none)".to_string();
    }
    let chars: Vec<char> = token.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("****{}", tail)
}

pub fn show(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    println!("config:       {}", config_path.display());
    println!("server:       {}", if config.server.is_empty() { "(none)" } else { config.server.as_str() });
    println!("token:        {}", mask(&config.token));
    println!("page-size:    {}", config.page_size);
    println!("timeout-secs: {}", config.timeout_secs);
    Ok(())
}

pub fn set(
    config_path: &Path,
    server: Option<String>,
    token: Option<String>,
    page_size: Option<u32>,
    timeout_secs: Option<u64>,
) -> Result<()> {
    if server.is_none() && token.is_none() && page_size.is_none() && timeout_secs.is_none() {
        anyhow::bail!("Nothing to set. Pass --server, --token, --page-size or --timeout-secs.");
    }
    if page_size == Some(0) {
        anyhow::bail!("--page-size must be at least 1");
    }

    let mut config = ClientConfig::load(config_path)?;
    if let Some(server) = server {
        config.server = server.trim().trim_end_matches('/').to_string();
    }
    if let Some(token) = token {
        config.token = token;
    }
    if let Some(n) = page_size {
        config.page_size = n;
    }
    if let Some(secs) = timeout_secs {
        config.timeout_secs = secs;
    }
    config.save(config_path)?;
    println!("Saved {}.", config_path.display());
    Ok(())
}
