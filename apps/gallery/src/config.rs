use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::layout::Breakpoints;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Viewports narrower than this get two gallery columns.
    pub phone_breakpoint_px: u32,
    /// Viewports at least this wide get four gallery columns.
    pub desktop_breakpoint_px: u32,
    /// Upper bound on slides accepted by a single arrange request.
    pub max_items: usize,
    /// Upper bound on an explicit `column_count` in an arrange request.
    pub max_columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        let breakpoints = Breakpoints::default();
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            phone_breakpoint_px: breakpoints.phone_max_px,
            desktop_breakpoint_px: breakpoints.desktop_min_px,
            max_items: 1000,
            max_columns: 12,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            phone_breakpoint_px: parse_env(
                "GALLERY_PHONE_BREAKPOINT_PX",
                defaults.phone_breakpoint_px,
            )?,
            desktop_breakpoint_px: parse_env(
                "GALLERY_DESKTOP_BREAKPOINT_PX",
                defaults.desktop_breakpoint_px,
            )?,
            max_items: parse_env("GALLERY_MAX_ITEMS", defaults.max_items)?,
            max_columns: parse_env("GALLERY_MAX_COLUMNS", defaults.max_columns)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.phone_breakpoint_px >= self.desktop_breakpoint_px {
            bail!(
                "GALLERY_PHONE_BREAKPOINT_PX ({}) must be below GALLERY_DESKTOP_BREAKPOINT_PX ({})",
                self.phone_breakpoint_px,
                self.desktop_breakpoint_px
            );
        }
        if self.max_items == 0 {
            bail!("GALLERY_MAX_ITEMS must be at least 1");
        }
        if self.max_columns == 0 {
            bail!("GALLERY_MAX_COLUMNS must be at least 1");
        }
        Ok(())
    }

    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            phone_max_px: self.phone_breakpoint_px,
            desktop_min_px: self.desktop_breakpoint_px,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{value}'")),
        None => Ok(default),
    }
}
