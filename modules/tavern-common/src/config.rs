use std::env;
use std::fmt::Display;
use std::str::FromStr;

use chrono_tz::Tz;
use tracing::info;

use crate::error::TavernError;
use crate::types::FiringSlot;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,
    pub channel_id: String,

    // Generation backend
    pub openai_api_key: String,
    pub openai_base_url: Option<String>,
    pub text_model: String,
    pub image_model: String,
    pub image_size: String,
    pub image_quality: String,
    pub image_posts_enabled: bool,

    // Scheduling
    pub timezone: Tz,
    pub schedule: Vec<FiringSlot>,
    pub slots: SlotPolicy,
    pub misfire_grace_secs: u64,

    // External call timeouts
    pub openai_timeout_secs: u64,
    pub telegram_timeout_secs: u64,
}

/// Which hours drive fixed kind choices in the selector. The hours are
/// configuration rather than constants; the firing schedule is configured
/// independently via `POST_SCHEDULE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPolicy {
    pub morning: u32,
    pub midday: u32,
    pub evening: u32,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            morning: 8,
            midday: 13,
            evening: 19,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing or malformed.
    pub fn from_env() -> Self {
        Self {
            bot_token: required_env("BOT_TOKEN"),
            channel_id: required_env("CHANNEL_ID"),
            openai_api_key: required_env("OPENAI_API_KEY"),
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
            text_model: env_or("OPENAI_MODEL", "gpt-4.1"),
            image_model: env_or("IMAGE_MODEL", "gpt-image-1"),
            image_size: env_or("IMAGE_SIZE", "1024x1024"),
            image_quality: env_or("IMAGE_QUALITY", "high"),
            image_posts_enabled: parsed_env("IMAGE_POSTS_ENABLED", true),
            timezone: env_or("TIMEZONE", "Asia/Almaty")
                .parse()
                .expect("TIMEZONE must be a valid IANA timezone name"),
            schedule: parse_schedule(&env_or("POST_SCHEDULE", "08:00,13:00,19:00"))
                .expect("POST_SCHEDULE must be a comma-separated list of HH:MM times"),
            slots: SlotPolicy {
                morning: parsed_env("MORNING_HOUR", 8),
                midday: parsed_env("MIDDAY_HOUR", 13),
                evening: parsed_env("EVENING_HOUR", 19),
            },
            misfire_grace_secs: parsed_env("MISFIRE_GRACE_SECS", 300),
            openai_timeout_secs: parsed_env("OPENAI_TIMEOUT_SECS", 120),
            telegram_timeout_secs: parsed_env("TELEGRAM_TIMEOUT_SECS", 30),
        }
    }

    /// Log the loaded configuration with credentials redacted.
    pub fn log_redacted(&self) {
        let schedule: Vec<String> = self.schedule.iter().map(|s| s.to_string()).collect();
        info!(
            channel_id = %self.channel_id,
            text_model = %self.text_model,
            image_model = %self.image_model,
            image_size = %self.image_size,
            image_quality = %self.image_quality,
            image_posts_enabled = self.image_posts_enabled,
            timezone = %self.timezone,
            schedule = schedule.join(",").as_str(),
            "Configuration loaded"
        );
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_env<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|err| panic!("{key} is invalid: {err}")),
        Err(_) => default,
    }
}

/// Parse a comma-separated `HH:MM` list into firing slots.
pub fn parse_schedule(s: &str) -> Result<Vec<FiringSlot>, TavernError> {
    let slots = s
        .split(',')
        .map(|part| FiringSlot::parse(part.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    if slots.is_empty() {
        return Err(TavernError::Config(
            "schedule must contain at least one firing slot".to_string(),
        ));
    }
    Ok(slots)
}
