//! Gateway settings.
//!
//! Sources are layered, later ones overriding earlier ones:
//! 1. `<config dir>/default.toml` (optional, directory from
//!    `ORDER_GATEWAY_CONFIG_DIR`, `config` by default)
//! 2. the file passed on the command line (required when given)
//! 3. environment variables such as `ORDER_GATEWAY__FIX__PRICE_SCALE=4`
//!
//! Every field has a default, so an empty configuration is valid.

use config::{Config, ConfigError, Environment, File};
use oms::{ClOrdIdGenerator, SessionId};
use oms_core::fix::factory::{DEFAULT_PRICE_SCALE, DEFAULT_QUANTITY_SCALE};
use oms_core::{FixFactory, ProtocolVersion, SequenceClOrdIdGenerator, UuidClOrdIdGenerator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const ENV_PREFIX: &str = "ORDER_GATEWAY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// env_logger filter used when `--log-level` is not given
    pub log_level: String,
    pub clordid: ClOrdIdSettings,
    pub fix: FixSettings,
    /// Sessions requests can be routed through, by name
    pub sessions: BTreeMap<String, SessionSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            clordid: ClOrdIdSettings::default(),
            fix: FixSettings::default(),
            sessions: default_sessions(),
        }
    }
}

/// One session per supported version, named after it in lower case
/// without dots (`fix42`, `fixt11`).
fn default_sessions() -> BTreeMap<String, SessionSettings> {
    ProtocolVersion::ALL
        .into_iter()
        .map(|version| {
            let name = version.begin_string().replace('.', "").to_lowercase();
            let session = SessionSettings {
                begin_string: version.begin_string().to_string(),
                sender_comp_id: "OMS".to_string(),
                target_comp_id: "EXCHANGE".to_string(),
            };
            (name, session)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClOrdIdStrategy {
    /// Prefix followed by 1, 2, 3, ...
    #[default]
    Sequence,
    /// Prefix followed by a random UUID
    Uuid,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClOrdIdSettings {
    pub strategy: ClOrdIdStrategy,
    pub prefix: String,
}

impl ClOrdIdSettings {
    pub fn generator(&self) -> Box<dyn ClOrdIdGenerator> {
        match self.strategy {
            ClOrdIdStrategy::Sequence => {
                Box::new(SequenceClOrdIdGenerator::new(self.prefix.clone()))
            }
            ClOrdIdStrategy::Uuid => Box::new(UuidClOrdIdGenerator::new(self.prefix.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixSettings {
    /// Decimal places written for OrderQty
    pub quantity_scale: u32,
    /// Decimal places written for Price, StopPx and StrikePrice
    pub price_scale: u32,
}

impl Default for FixSettings {
    fn default() -> Self {
        Self {
            quantity_scale: DEFAULT_QUANTITY_SCALE,
            price_scale: DEFAULT_PRICE_SCALE,
        }
    }
}

impl FixSettings {
    pub fn factory(&self) -> FixFactory {
        FixFactory::new().with_scales(self.quantity_scale, self.price_scale)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub begin_string: String,
    pub sender_comp_id: String,
    pub target_comp_id: String,
}

impl SessionSettings {
    pub fn session_id(&self) -> SessionId {
        SessionId::new(
            self.begin_string.clone(),
            self.sender_comp_id.clone(),
            self.target_comp_id.clone(),
        )
    }
}

impl Settings {
    /// Loads settings from the standard locations.
    ///
    /// # Arguments
    ///
    /// * `file` - Optional settings file from the command line.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_dir(), file, ENV_PREFIX)
    }

    /// Loads settings from an explicit config directory and env prefix.
    pub fn load_from(
        config_dir: &str,
        file: Option<&Path>,
        env_prefix: &str,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false));

        if let Some(file) = file {
            builder = builder.add_source(File::from(file).required(true));
        }

        let s = builder
            .add_source(
                Environment::with_prefix(env_prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    fn config_dir() -> String {
        std::env::var("ORDER_GATEWAY_CONFIG_DIR").unwrap_or_else(|_| "config".into())
    }
}
