use std::ffi::OsString;

use crate::{read_config, scan, ConfigSource, Error, OptionTemplate, Registry, Result, Source};

/// Parses `args` against `templates`, then fills unset values from a config file.
///
/// `args[0]` is the program name. On success the index of the first positional
/// argument is returned (`args.len()` if there are none).
///
/// On failure, values already written into `templates` are left in place.
pub fn parse<S>(
    args: &[S],
    templates: &mut [OptionTemplate],
    config: &ConfigSource,
) -> Result<usize>
where
    S: AsRef<str>,
{
    if templates.is_empty() {
        return Ok(0);
    }

    let registry = Registry::build(templates)?;
    let stop = scan(&registry, templates, args)?;

    if let Some(source) = config.resolve(templates) {
        let kind = match source {
            Source::Explicit(..) => "explicit",
            Source::Default(..) => "default",
        };
        log::debug!("reading {} config from {}", kind, source.path().display());
        read_config(&registry, templates, source.path())?;
    }

    match templates.iter().find(|t| t.required && !t.is_satisfied()) {
        Some(template) => Err(Error::RequiredOptionMissing(template.name().to_string())),
        None => Ok(stop),
    }
}

/// Collects arguments as strings, failing on the first one that is not valid unicode
pub fn args_from<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| Error::NotUnicode(arg.to_string_lossy().into_owned()))
        })
        .collect()
}

/// [`parse`] over the arguments of the current process, returning the positional arguments
pub fn parse_env(templates: &mut [OptionTemplate], config: &ConfigSource) -> Result<Vec<String>> {
    let args = args_from(std::env::args_os())?;
    let stop = parse(&args, templates, config)?;
    Ok(args.into_iter().skip(stop.max(1)).collect())
}
