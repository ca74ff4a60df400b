use std::collections::HashSet;

use log::debug;

use crate::caddyfile::Dispenser;
use crate::core::module::Unmarshaler;
use crate::error::{Error, ParseErrorKind};
use crate::providers::easydns::config::{EasyDnsProvider, Field};

impl Unmarshaler for EasyDnsProvider {
    /// Sets up the provider from configuration tokens. Syntax:
    ///
    /// ```text
    /// easydns {
    ///     api_token <easydns_api_token>
    ///     api_key <easydns_api_key>
    ///     api_url <easydns_api_url>     # optional, defaults to https://rest.easydns.net
    /// }
    /// ```
    ///
    /// A key may appear once per parse. A key given with an empty value
    /// still counts as set, as does a value assigned before parsing.
    fn unmarshal_caddyfile(&mut self, d: &mut Dispenser) -> Result<(), Error> {
        let mut seen = HashSet::new();

        while d.next() {
            if d.next_arg() {
                return Err(d.arg_err());
            }
            let nesting = d.nesting();
            while d.next_block(nesting) {
                let Some(field) = Field::from_key(d.val()) else {
                    let key = d.val().to_string();
                    return Err(d.err(ParseErrorKind::UnrecognizedSubdirective(key)));
                };
                if !seen.insert(field) || !self.get(field).is_empty() {
                    return Err(d.err(ParseErrorKind::DuplicateField(field.label())));
                }
                if d.next_arg() {
                    *self.get_mut(field) = d.val().to_string();
                }
                if d.next_arg() {
                    return Err(d.arg_err());
                }
            }
            if d.nesting() > nesting {
                return Err(d.eof_err());
            }
        }

        for field in Field::REQUIRED {
            if self.get(field).is_empty() {
                return Err(d.err(ParseErrorKind::MissingField(field.label())));
            }
        }
        debug!("Parsed easydns block: {self:?}");
        Ok(())
    }
}
