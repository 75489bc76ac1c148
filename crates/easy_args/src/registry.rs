use std::collections::HashMap;

use crate::{Error, OptionTemplate, Result};

/// Lookup tables from keys to positions in the template slice they were built from.
///
/// The registry never owns the templates, it is rebuilt for every parse.
#[derive(Default, Debug)]
pub struct Registry {
    by_short: HashMap<Box<str>, usize>,
    by_long: HashMap<Box<str>, usize>,
}

impl Registry {
    pub fn build(templates: &[OptionTemplate]) -> Result<Self> {
        let mut this = Self::default();

        for (index, template) in templates.iter().enumerate() {
            let (short, long) = (template.short_key(), template.long_key());
            if short.is_none() && long.is_none() {
                return Err(Error::Nameless(index));
            }

            if let Some(key) = short {
                if this.by_short.insert(key.into(), index).is_some() {
                    return Err(Error::DuplicateShortKey(key.to_string()));
                }
            }

            if let Some(key) = long {
                if this.by_long.insert(key.into(), index).is_some() {
                    return Err(Error::DuplicateLongKey(key.to_string()));
                }
            }
        }

        Ok(this)
    }

    pub fn lookup_short(&self, key: &str) -> Option<usize> {
        self.by_short.get(key).copied()
    }

    pub fn lookup_long(&self, key: &str) -> Option<usize> {
        self.by_long.get(key).copied()
    }

    /// Tries the short keys first, then the long keys
    pub fn lookup(&self, key: &str) -> Option<usize> {
        self.lookup_short(key).or_else(|| self.lookup_long(key))
    }
}
