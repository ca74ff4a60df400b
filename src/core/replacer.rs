use std::collections::HashMap;
use std::env;

/// Substitutes `{placeholder}` expressions in configuration strings.
#[cfg_attr(test, mockall::automock)]
pub trait Replacer {
    /// Replaces placeholders in `input`. Returns `empty` when `input` is empty.
    fn replace_all(&self, input: &str, empty: &str) -> String;
}

/// Resolves environment, system and explicitly set placeholders.
///
/// Unknown placeholders are kept verbatim.
#[derive(Debug, Clone, Default)]
pub struct GlobalReplacer {
    values: HashMap<String, String>,
}

impl GlobalReplacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    fn lookup(&self, key: &str) -> Option<String> {
        if let Some(value) = self.values.get(key) {
            return Some(value.clone());
        }
        if let Some(name) = key.strip_prefix("env.") {
            return Some(env::var(name).unwrap_or_default());
        }
        match key {
            "system.os" => Some(env::consts::OS.to_string()),
            "system.arch" => Some(env::consts::ARCH.to_string()),
            "system.wd" => env::current_dir()
                .ok()
                .map(|dir| dir.to_string_lossy().into_owned()),
            _ => None,
        }
    }
}

impl Replacer for GlobalReplacer {
    fn replace_all(&self, input: &str, empty: &str) -> String {
        if input.is_empty() {
            return empty.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            out.push_str(&rest[..open]);
            let key = &rest[open + 1..close];
            match self.lookup(key) {
                Some(value) if is_placeholder_key(key) => out.push_str(&value),
                _ => out.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }
        out.push_str(rest);
        out
    }
}

fn is_placeholder_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(|c: char| c == '{' || c.is_whitespace())
}
