use crate::errors::SdkError;

pub struct Config {
    pub strict_format: bool,
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, SdkError> {
        Ok(Self {
            strict_format: env_flag("STRICT_FORMAT", false)?,
            pretty: env_flag("SWAP_ISSUES_PRETTY", true)?,
        })
    }
}

fn env_flag(name: &str, default: bool) -> Result<bool, SdkError> {
    parse_flag(name, std::env::var(name).ok(), default)
}

fn parse_flag(name: &str, raw: Option<String>, default: bool) -> Result<bool, SdkError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(SdkError::ConfigError(format!("{}={}", name, value))),
        },
    }
}
