use std::fmt;

use crate::caddyfile::Dispenser;
use crate::core::replacer::Replacer;
use crate::error::Error;

/// Builds a fresh, empty instance of a module.
pub type ModuleFactory = fn() -> Box<dyn Module>;

/// Identity and constructor a module announces to the registry.
#[derive(Debug, Clone, Copy)]
pub struct ModuleInfo {
    /// Dotted id, e.g. `dns.providers.easydns`.
    pub id: &'static str,
    pub new: ModuleFactory,
}

impl ModuleInfo {
    /// Everything before the last label of the id.
    pub fn namespace(&self) -> &'static str {
        self.id.rsplit_once('.').map(|(ns, _)| ns).unwrap_or("")
    }

    /// The last label of the id.
    pub fn name(&self) -> &'static str {
        self.id.rsplit_once('.').map(|(_, name)| name).unwrap_or(self.id)
    }
}

/// Populates a module from a block of configuration directives.
pub trait Unmarshaler {
    fn unmarshal_caddyfile(&mut self, d: &mut Dispenser) -> Result<(), Error>;
}

/// Finalizes a module before first use.
pub trait Provisioner {
    fn provision(&mut self, repl: &dyn Replacer) -> Result<(), Error>;
}

pub trait Module: Unmarshaler + Provisioner + fmt::Debug + Send + Sync {
    fn module_info() -> ModuleInfo
    where
        Self: Sized;

    fn id(&self) -> &'static str;

    /// Populates the module from its JSON representation.
    fn load_json(&mut self, value: serde_json::Value) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Dummy;

    impl Unmarshaler for Dummy {
        fn unmarshal_caddyfile(&mut self, _d: &mut Dispenser) -> Result<(), Error> {
            Ok(())
        }
    }

    impl Provisioner for Dummy {
        fn provision(&mut self, _repl: &dyn Replacer) -> Result<(), Error> {
            Ok(())
        }
    }

    impl Module for Dummy {
        fn module_info() -> ModuleInfo {
            ModuleInfo {
                id: "dns.providers.dummy",
                new: || Box::new(Dummy),
            }
        }

        fn id(&self) -> &'static str {
            "dns.providers.dummy"
        }

        fn load_json(&mut self, _value: serde_json::Value) -> Result<(), Error> {
            Ok(())
        }
    }

    #[test]
    fn test_module_info_labels() {
        let info = Dummy::module_info();
        assert_eq!(info.namespace(), "dns.providers");
        assert_eq!(info.name(), "dummy");
        assert_eq!((info.new)().id(), "dns.providers.dummy");
    }

    #[test]
    fn test_single_label_id() {
        let info = ModuleInfo {
            id: "admin",
            new: || Box::new(Dummy),
        };
        assert_eq!(info.namespace(), "");
        assert_eq!(info.name(), "admin");
    }
}
