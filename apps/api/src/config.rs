use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Load the sample experience/education/skill records at startup.
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seed_sample_data: match std::env::var("SEED_SAMPLE_DATA") {
                Ok(raw) => parse_flag(&raw)
                    .with_context(|| "SEED_SAMPLE_DATA must be a boolean flag".to_string())?,
                Err(_) => true,
            },
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" YES ").unwrap());
        assert!(parse_flag("1").unwrap());
        assert!(!parse_flag("false").unwrap());
        assert!(!parse_flag("Off").unwrap());
        assert!(!parse_flag("0").unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        assert!(parse_flag("maybe").is_err());
        assert!(parse_flag("").is_err());
    }
}
