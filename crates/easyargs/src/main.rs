use anyhow::Context as _;
use easy_args::{ConfigSource, OptionTemplate};
use std::path::Path;

mod output;
use output::Report;

mod schema;
use schema::Schema;

mod usage;
use usage::Usage;

const DEFAULT_CONFIG: &str = "easyargs.conf";

const SCHEMA: usize = 0;
const CONFIG: usize = 1;
const HELP: usize = 2;

fn own_templates() -> Vec<OptionTemplate> {
    vec![
        OptionTemplate::new("s", "schema")
            .takes_value()
            .required()
            .with_description("TOML file describing the program's options"),
        OptionTemplate::new("C", "config")
            .takes_value()
            .with_description("read these options from this file"),
        OptionTemplate::new("h", "help").with_description("print this message"),
    ]
}

fn init_logger() -> anyhow::Result<()> {
    // stdout is reserved for the report
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    alto_logger::init_alt_term_logger()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logger()?;

    let args = easy_args::args_from(std::env::args_os())?;

    let mut own = own_templates();
    let config = ConfigSource::default()
        .with_option(CONFIG)
        .with_default_path(DEFAULT_CONFIG);

    let result = easy_args::parse(&args, &mut own, &config);
    if own[HELP].present {
        print!("{}", Usage::new("easyargs", "<program> [args...]", &own));
        return Ok(());
    }
    let stop = result?;

    let inner = match args.get(stop..).filter(|s| !s.is_empty()) {
        Some(inner) => inner,
        None => anyhow::bail!("a program name must follow the options"),
    };

    let schema_path = own[SCHEMA]
        .value()
        .map(Path::new)
        .context("a schema must be provided")?;
    let schema = Schema::load(schema_path)?;
    log::debug!("loaded {} options from {}", schema.options.len(), schema_path.display());

    let mut templates = schema.templates();
    let source = schema.config_source(&templates)?;

    let inner_stop = easy_args::parse(inner, &mut templates, &source)
        .with_context(|| format!("cannot parse the arguments of '{}'", inner[0]))?;
    let rest = inner.get(inner_stop.max(1)..).unwrap_or_default();

    let report = Report::new(&templates, rest);
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &report)?;
    println!();

    Ok(())
}
