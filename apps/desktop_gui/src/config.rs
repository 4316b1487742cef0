//! Startup configuration parsed from command-line flags.

use anyhow::{bail, Context};
use clap::Parser;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "records_desk",
    about = "Sign in and browse the fetched record list"
)]
pub struct StartupConfig {
    /// Endpoint returning the record list as a JSON array.
    #[arg(long, default_value = shared::RECORDS_URL)]
    pub records_url: String,
    /// Image drawn as the avatar on every card.
    #[arg(long, default_value = shared::AVATAR_URL)]
    pub avatar_url: String,
    /// Tracing filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_filter: String,
    #[arg(long, default_value_t = 1100.0)]
    pub width: f32,
    #[arg(long, default_value_t = 720.0)]
    pub height: f32,
}

impl StartupConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        parse_http_url("--records-url", &self.records_url)?;
        parse_http_url("--avatar-url", &self.avatar_url)?;
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            bail!(
                "window size must be positive, got {}x{}",
                self.width,
                self.height
            );
        }
        Ok(())
    }
}

fn parse_http_url(flag: &str, raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("{flag} is not a valid URL: {raw}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("{flag} must use http or https, got '{other}'"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
