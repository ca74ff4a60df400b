use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use log::{debug, info};

use crate::caddyfile::Dispenser;
use crate::core::module::{Module, Provisioner, Unmarshaler};
use crate::core::registry::new_module;
use crate::core::replacer::GlobalReplacer;
use crate::error::Error;
use crate::providers::easydns::MODULE_ID;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    Caddyfile,
    Json,
}

impl FromStr for Adapter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "caddyfile" => Ok(Adapter::Caddyfile),
            "json" => Ok(Adapter::Json),
            other => Err(Error::Config(format!("unsupported adapter: {other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub config_file: PathBuf,
    pub adapter: Adapter,
    pub module_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Config {
            config_file: env::var("CADDYFILE")
                .map(PathBuf::from)
                .map_err(|_| Error::Config("CADDYFILE is not set".to_string()))?,
            adapter: env::var("CONFIG_ADAPTER")
                .unwrap_or_else(|_| "caddyfile".to_string())
                .parse()?,
            module_id: env::var("MODULE_ID").unwrap_or_else(|_| MODULE_ID.to_string()),
        })
    }

    /// Reads the configured file and builds a provisioned module from it.
    pub fn load_module(&self) -> Result<Box<dyn Module>, Error> {
        info!("Loading {} from {}", self.module_id, self.config_file.display());
        let input = fs::read_to_string(&self.config_file)?;
        self.build_module(&input)
    }

    pub fn build_module(&self, input: &str) -> Result<Box<dyn Module>, Error> {
        let mut module = new_module(&self.module_id)?;
        match self.adapter {
            Adapter::Caddyfile => {
                let file = self.config_file.display().to_string();
                let mut d = Dispenser::new(&file, input)?;
                module.unmarshal_caddyfile(&mut d)?;
            }
            Adapter::Json => module.load_json(serde_json::from_str(input)?)?,
        }
        module.provision(&GlobalReplacer::new())?;
        debug!("Provisioned {module:?}");
        Ok(module)
    }
}

pub(crate) mod mock {
    use super::*;

    impl Default for Config {
        fn default() -> Self {
            Config {
                config_file: PathBuf::from("Caddyfile"),
                adapter: Adapter::Caddyfile,
                module_id: MODULE_ID.to_string(),
            }
        }
    }
}
