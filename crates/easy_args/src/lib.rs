//! Command line options with a config file fallback.
//!
//! ```no_run
//! use easy_args::{parse_env, ConfigSource, OptionTemplate};
//!
//! let mut templates = vec![
//!     OptionTemplate::new("f", "file").takes_value().required(),
//!     OptionTemplate::new("c", "config").takes_value(),
//! ];
//!
//! let config = ConfigSource::default()
//!     .with_option(1)
//!     .with_default_path("app.conf");
//!
//! let rest = parse_env(&mut templates, &config).unwrap();
//! println!("file: {:?}, rest: {:?}", templates[0].value(), rest);
//! ```
//!
//! Config files hold one `key value` pair per line, keyed by the bare short or long name.
//! Unknown keys in a config file are skipped, unknown options on the command line are errors.
//! Likewise a missing default config file is skipped while a missing explicit one is an error.

mod error;
pub use error::{Error, Result};

mod template;
pub use template::{release, OptionTemplate};

mod registry;
pub use registry::Registry;

mod tokenize;
pub use tokenize::{tokenize, Line};

mod config;
pub use config::{read_config, read_config_from, ConfigSource, Source};

mod scan;
pub use scan::scan;

mod parse;
pub use parse::{args_from, parse, parse_env};

#[cfg(test)]
mod tests;
