//! [`Config`]-related definitions.

use common::Percent;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Pricing configuration.
    #[serde(default)]
    pub pricing: Pricing,

    /// Concierge handoff configuration.
    #[serde(default)]
    pub handoff: Handoff,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }

    /// Returns the [`service::Config`] described by this [`Config`].
    #[must_use]
    pub fn service(&self) -> service::Config {
        service::Config {
            pricing: self.pricing.into(),
            handoff: self.handoff.clone().into(),
        }
    }
}

/// Pricing configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Pricing {
    /// Service fee charged on the subtotal.
    #[default(Percent::whole(10))]
    pub service_fee: Percent,

    /// Tax charged on the subtotal plus the service fee.
    #[default(Percent::whole(11))]
    pub tax: Percent,
}

impl From<Pricing> for service::domain::Pricing {
    fn from(value: Pricing) -> Self {
        let Pricing { service_fee, tax } = value;
        Self { service_fee, tax }
    }
}

/// Concierge handoff configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Handoff {
    /// Brand name put into the handoff message.
    #[default("StayinUBUD".to_owned())]
    pub brand: String,

    /// Messaging account of the concierge.
    #[default("6282269128232".to_owned())]
    pub recipient: String,

    /// Base URL of the messaging deep links.
    #[default("https://wa.me".to_owned())]
    pub base_url: String,
}

impl From<Handoff> for service::handoff::Config {
    fn from(value: Handoff) -> Self {
        let Handoff {
            brand,
            recipient,
            base_url,
        } = value;

        Self {
            brand,
            recipient,
            base_url,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Percent;
    use config::{builder::DefaultState, ConfigBuilder, FileFormat};

    use super::{Config, LogLevel};

    fn parse(toml: &str) -> Config {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_to_brand_settings() {
        let config = parse("");
        let svc = config.service();

        assert_eq!(svc, service::Config::default());
        assert_eq!(svc.pricing.service_fee, Percent::whole(10));
        assert_eq!(svc.pricing.tax, Percent::whole(11));
        assert_eq!(svc.handoff.recipient, "6282269128232");
        assert!(matches!(config.log.level, LogLevel::Info));
    }

    #[test]
    fn overrides_sections() {
        let config = parse(
            r#"
            [pricing]
            service_fee = "12.5"

            [handoff]
            brand = "Ubud Stays"

            [log]
            level = "DEBUG"
            "#,
        );
        let svc = config.service();

        assert_eq!(svc.pricing.service_fee, Percent::from_str("12.5").unwrap());
        assert_eq!(svc.pricing.tax, Percent::whole(11));
        assert_eq!(svc.handoff.brand, "Ubud Stays");
        assert_eq!(svc.handoff.base_url, "https://wa.me");
        assert!(matches!(config.log.level, LogLevel::Debug));
    }

    #[test]
    fn rejects_out_of_range_percents() {
        let res = ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::from_str(
                "[pricing]\ntax = \"150\"",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<Config>();

        assert!(res.is_err());
    }
}
