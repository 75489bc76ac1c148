use crate::{Error, OptionTemplate, Registry, Result};

/// Walks `args` (skipping the program name) and records every option it finds.
///
/// Returns the index of the first token that does not start with `-`, or
/// `args.len()` if every token was consumed.
pub fn scan<S>(
    registry: &Registry,
    templates: &mut [OptionTemplate],
    args: &[S],
) -> Result<usize>
where
    S: AsRef<str>,
{
    let mut pos = 1;
    while pos < args.len() {
        let arg = args[pos].as_ref();
        if !arg.starts_with('-') {
            log::trace!("positional arguments start at {}", pos);
            return Ok(pos);
        }

        let (key, index) = match arg.strip_prefix("--") {
            Some(key) => (key, registry.lookup_long(key)),
            None => {
                let key = &arg[1..];
                (key, registry.lookup_short(key))
            }
        };

        let template = match index {
            Some(index) => &mut templates[index],
            None => return Err(Error::UnknownOption(key.to_string())),
        };

        log::trace!("matched option '{}'", key);
        template.present = true;

        if !template.takes_value {
            pos += 1;
            continue;
        }

        let next: Option<&str> = args.get(pos + 1).map(|s| s.as_ref());
        match next.filter(|s| !s.starts_with('-')) {
            Some(value) => {
                template.set(value);
                pos += 2;
            }
            None => return Err(Error::MissingArgument(key.to_string())),
        }
    }

    Ok(args.len())
}
