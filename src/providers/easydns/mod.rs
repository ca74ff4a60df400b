//! easyDNS provider module

pub mod caddyfile;
pub mod config;


pub use config::{DEFAULT_API_URL, EasyDnsProvider, Field, SANDBOX_API_URL};

use std::sync::Once;

use log::{error, info, warn};

use crate::core::module::{Module, ModuleInfo, Provisioner};
use crate::core::registry::register_module;
use crate::core::replacer::Replacer;
use crate::error::Error;

pub const MODULE_ID: &str = "dns.providers.easydns";

static REGISTER: Once = Once::new();

/// Announces the provider to the process-wide module registry. Only the
/// first call has an effect.
pub fn register() {
    REGISTER.call_once(|| match register_module(EasyDnsProvider::module_info()) {
        Ok(()) => info!("Registered module {MODULE_ID}"),
        Err(e) => error!("Failed to register module {MODULE_ID}: {e}"),
    });
}

impl Module for EasyDnsProvider {
    fn module_info() -> ModuleInfo {
        ModuleInfo {
            id: MODULE_ID,
            new: || Box::new(EasyDnsProvider::default()),
        }
    }

    fn id(&self) -> &'static str {
        MODULE_ID
    }

    fn load_json(&mut self, value: serde_json::Value) -> Result<(), Error> {
        *self = serde_json::from_value(value)?;
        Ok(())
    }
}

impl Provisioner for EasyDnsProvider {
    fn provision(&mut self, repl: &dyn Replacer) -> Result<(), Error> {
        self.api_token = repl.replace_all(&self.api_token, "");
        self.api_key = repl.replace_all(&self.api_key, "");
        self.api_url = repl.replace_all(&self.api_url, DEFAULT_API_URL);
        // A placeholder may resolve to nothing.
        if self.api_url.is_empty() {
            self.api_url = DEFAULT_API_URL.to_string();
        }

        for field in Field::REQUIRED {
            if self.get(field).is_empty() {
                warn!("easydns {} is empty after provisioning", field.label());
            }
        }
        Ok(())
    }
}
