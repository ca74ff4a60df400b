pub mod easydns;
