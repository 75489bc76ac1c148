/// A single recognized option.
///
/// Templates are owned by the caller. A parse only ever touches `present`
/// and `value`, so the same set can be inspected after a parse fails.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct OptionTemplate {
    pub short: Option<Box<str>>,
    pub long: Option<Box<str>>,
    pub required: bool,
    pub takes_value: bool,
    pub description: Option<Box<str>>,

    pub present: bool,
    pub value: Option<String>,
}

impl OptionTemplate {
    /// Builds a template from both keys, an empty key counts as absent
    pub fn new(short: impl Into<Box<str>>, long: impl Into<Box<str>>) -> Self {
        fn key(s: Box<str>) -> Option<Box<str>> {
            Some(s).filter(|s| !s.is_empty())
        }

        Self {
            short: key(short.into()),
            long: key(long.into()),
            ..Self::default()
        }
    }

    /// A template only reachable as `-key`
    pub fn short(key: impl Into<Box<str>>) -> Self {
        Self {
            short: Some(key.into()),
            ..Self::default()
        }
    }

    /// A template only reachable as `--key`
    pub fn long(key: impl Into<Box<str>>) -> Self {
        Self {
            long: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn with_long(mut self, key: impl Into<Box<str>>) -> Self {
        self.long.replace(key.into());
        self
    }

    pub fn with_short(mut self, key: impl Into<Box<str>>) -> Self {
        self.short.replace(key.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn takes_value(mut self) -> Self {
        self.takes_value = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<Box<str>>) -> Self {
        self.description.replace(description.into());
        self
    }

    pub fn short_key(&self) -> Option<&str> {
        self.short.as_deref().filter(|s| !s.is_empty())
    }

    pub fn long_key(&self) -> Option<&str> {
        self.long.as_deref().filter(|s| !s.is_empty())
    }

    /// The name used in messages: the short key if there is one, otherwise the long key
    pub fn name(&self) -> &str {
        self.short_key().or_else(|| self.long_key()).unwrap_or_default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether this template has been satisfied for the `required` check
    pub fn is_satisfied(&self) -> bool {
        if self.takes_value {
            self.value.is_some()
        } else {
            self.present
        }
    }

    /// Unconditionally replaces the value, returning the previous one
    pub fn set(&mut self, value: impl Into<String>) -> Option<String> {
        self.value.replace(value.into())
    }

    /// Sets the value only when no higher priority source has set it already
    pub fn set_if_absent(&mut self, value: impl Into<String>) -> bool {
        if self.value.is_some() {
            return false;
        }
        self.value.replace(value.into());
        true
    }
}

/// Drops every value a parse stored in `templates`, leaving them ready for reuse
pub fn release(templates: &mut [OptionTemplate]) {
    for template in templates {
        template.present = false;
        template.value.take();
    }
}
