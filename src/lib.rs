//! easyDNS provider module: registration, configuration block parsing and
//! provisioning of API credentials.

pub mod caddyfile;
pub mod config;
pub mod core;
pub mod error;
pub mod providers;

pub use crate::core::module::{Module, ModuleInfo, Provisioner, Unmarshaler};
pub use crate::core::replacer::{GlobalReplacer, Replacer};
pub use crate::error::{Error, ParseErrorKind};
pub use crate::providers::easydns::EasyDnsProvider;

/// Registers every module this crate provides. Safe to call more than once.
pub fn register_modules() {
    providers::easydns::register();
}
