use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use log::debug;

use crate::core::module::{Module, ModuleInfo};
use crate::error::Error;

static MODULES: LazyLock<RwLock<ModuleRegistry>> =
    LazyLock::new(|| RwLock::new(ModuleRegistry::new()));

#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: HashMap<&'static str, ModuleInfo>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        ModuleRegistry {
            modules: HashMap::new(),
        }
    }

    /// Adds a module. Each id can be registered only once.
    pub fn register(&mut self, info: ModuleInfo) -> Result<(), Error> {
        validate_id(info.id)?;
        if self.modules.contains_key(info.id) {
            return Err(Error::DuplicateModule(info.id.to_string()));
        }
        debug!("Registered module {}", info.id);
        self.modules.insert(info.id, info);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<ModuleInfo> {
        self.modules.get(id).copied()
    }

    /// Builds a new, empty instance of the module registered under `id`.
    pub fn instantiate(&self, id: &str) -> Result<Box<dyn Module>, Error> {
        self.get(id)
            .map(|info| (info.new)())
            .ok_or_else(|| Error::UnknownModule(id.to_string()))
    }

    /// Registered ids, sorted.
    pub fn list(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.modules.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

fn validate_id(id: &str) -> Result<(), Error> {
    let valid = !id.is_empty()
        && id
            .split('.')
            .all(|label| !label.is_empty() && !label.contains(char::is_whitespace));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidModuleId(id.to_string()))
    }
}

/// Registers a module in the process-wide registry.
pub fn register_module(info: ModuleInfo) -> Result<(), Error> {
    MODULES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(info)
}

pub fn get_module(id: &str) -> Option<ModuleInfo> {
    MODULES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(id)
}

pub fn new_module(id: &str) -> Result<Box<dyn Module>, Error> {
    MODULES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .instantiate(id)
}

pub fn modules() -> Vec<&'static str> {
    MODULES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .list()
}
