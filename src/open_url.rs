use anyhow::{Context, Result, bail};
use std::process::Command;
use tracing::debug;

/// Opens `url` with `open_command` when configured, else the system default.
pub fn open_url(url: &str, open_command: Option<&str>) -> Result<()> {
    if !is_openable(url) {
        bail!("not an http(s) link: {}", url);
    }
    debug!(url, "opening article");
    match open_command {
        Some(cmd) => {
            Command::new(cmd)
                .arg(url)
                .spawn()
                .with_context(|| format!("failed to run {}", cmd))?;
        }
        None => open::that(url).with_context(|| format!("failed to open {}", url))?,
    }
    Ok(())
}

fn is_openable(url: &str) -> bool {
    url::Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
