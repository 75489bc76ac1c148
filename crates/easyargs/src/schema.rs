use anyhow::Context as _;
use easy_args::{ConfigSource, OptionTemplate};
use std::path::{Path, PathBuf};

/// The options of the program being fronted, loaded from TOML
///
/// ```toml
/// config = "c"
/// default_config = "app.conf"
///
/// [[option]]
/// short = "c"
/// long = "config"
/// takes_value = true
/// ```
#[derive(Default, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// Short or long key of the option that names a config file
    pub config: Option<String>,
    pub default_config: Option<PathBuf>,
    #[serde(default, rename = "option")]
    pub options: Vec<OptionDef>,
}

#[derive(Default, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionDef {
    pub short: Option<String>,
    pub long: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub takes_value: bool,
    pub description: Option<String>,
}

impl Schema {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read schema '{}'", path.display()))?;
        Self::parse(&data).with_context(|| format!("invalid schema '{}'", path.display()))
    }

    pub fn parse(data: &str) -> anyhow::Result<Self> {
        toml::from_str(data).map_err(Into::into)
    }

    pub fn templates(&self) -> Vec<OptionTemplate> {
        self.options.iter().map(OptionDef::template).collect()
    }

    pub fn config_source(&self, templates: &[OptionTemplate]) -> anyhow::Result<ConfigSource> {
        let mut source = ConfigSource::default();

        if let Some(key) = self.config.as_deref() {
            let index = templates
                .iter()
                .position(|t| t.short_key() == Some(key) || t.long_key() == Some(key))
                .with_context(|| format!("config option '{}' is not a declared option", key))?;
            source = source.with_option(index);
        }

        if let Some(path) = &self.default_config {
            source = source.with_default_path(path.clone());
        }

        Ok(source)
    }
}

impl OptionDef {
    fn template(&self) -> OptionTemplate {
        OptionTemplate {
            short: self.short.as_deref().map(Into::into),
            long: self.long.as_deref().map(Into::into),
            required: self.required,
            takes_value: self.takes_value,
            description: self.description.as_deref().map(Into::into),
            ..OptionTemplate::default()
        }
    }
}
