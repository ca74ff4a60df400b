pub mod module;
pub mod registry;
pub mod replacer;
