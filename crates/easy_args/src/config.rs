use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{tokenize, Error, Line, OptionTemplate, Registry, Result};

/// Where config values may come from
#[derive(Default, Clone, Debug)]
pub struct ConfigSource {
    /// Index of the template whose value names an explicit config file
    pub option: Option<usize>,
    /// Read only if it exists on disk
    pub default_path: Option<PathBuf>,
}

/// The config file a parse will actually read
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Explicit(PathBuf),
    Default(PathBuf),
}

impl Source {
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }
}

impl ConfigSource {
    pub fn with_option(mut self, index: usize) -> Self {
        self.option.replace(index);
        self
    }

    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path.replace(path.into());
        self
    }

    /// Picks the config file to read after the command line has been scanned.
    ///
    /// An explicit config option that was given on the command line shadows the
    /// default path, even if it carries no value.
    pub fn resolve(&self, templates: &[OptionTemplate]) -> Option<Source> {
        if let Some(template) = self.option.and_then(|index| templates.get(index)) {
            if template.present {
                log::debug!("config option '{}' was provided", template.name());
                return template.value().map(PathBuf::from).map(Source::Explicit);
            }
        }

        let path = self.default_path.as_ref()?;
        if !path.exists() {
            log::debug!("default config '{}' does not exist", path.display());
            return None;
        }
        Some(Source::Default(path.clone()))
    }
}

/// Fills in values from the config file at `path`
pub fn read_config(
    registry: &Registry,
    templates: &mut [OptionTemplate],
    path: &Path,
) -> Result<()> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_config_from(registry, templates, BufReader::new(file), path)
}

/// Fills in values from any line oriented reader, `path` only names it in errors.
///
/// Values already set are never overwritten. Unknown keys are skipped. The first
/// line naming a valued option without a value stops the read, earlier lines stay applied.
pub fn read_config_from<R>(
    registry: &Registry,
    templates: &mut [OptionTemplate],
    mut reader: R,
    path: &Path,
) -> Result<()>
where
    R: BufRead,
{
    let mut buf = Vec::new();
    for n in 1.. {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }

        // invalid bytes turn into U+FFFD, so such keys never match a template
        let line = String::from_utf8_lossy(&buf);
        let Line { key, value } = match tokenize(&line) {
            Some(line) => line,
            None => continue,
        };

        let template = match registry.lookup(key) {
            Some(index) => &mut templates[index],
            None => {
                log::trace!("skipping unknown config key '{}'", key.escape_debug());
                continue;
            }
        };

        template.present = true;
        if !template.takes_value || template.value.is_some() {
            continue;
        }

        match value {
            Some(value) => {
                log::trace!(
                    "'{}' = '{}' from {}",
                    key,
                    value.escape_debug(),
                    path.display()
                );
                template.set_if_absent(value);
            }
            None => {
                return Err(Error::Format {
                    path: path.to_path_buf(),
                    line: n,
                    option: key.to_string(),
                })
            }
        }
    }

    Ok(())
}
