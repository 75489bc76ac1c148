use super::*;
use std::{ffi::OsString, io::Write as _};

fn config_file(data: &str) -> tempfile::NamedTempFile {
    let mut temp = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
    temp.write_all(data.as_bytes()).unwrap();
    temp
}

fn none() -> ConfigSource {
    ConfigSource::default()
}

#[test]
fn option_argument() {
    let templates = &mut [OptionTemplate::short("f").takes_value()];
    let stop = parse(&["prog", "-f", "HelloWorld"], templates, &none()).unwrap();
    assert_eq!(stop, 3);
    assert_eq!(templates[0].value(), Some("HelloWorld"));
}

#[test]
fn option_present() {
    let templates = &mut [OptionTemplate::short("f")];
    assert_eq!(parse(&["prog", "-f"], templates, &none()).unwrap(), 2);
    assert!(templates[0].present);
    assert_eq!(templates[0].value(), None);
}

#[test]
fn unknown_option() {
    let templates = &mut [OptionTemplate::short("f")];
    let err = parse(&["prog", "-u"], templates, &none()).unwrap_err();
    assert!(matches!(err, Error::UnknownOption(ref key) if key == "u"));
    assert_eq!(err.to_string(), "unknown option: u");
}

#[test]
fn missing_argument() {
    let args = &["prog", "-f", "-f"];
    for len in 2..=3 {
        let templates = &mut [OptionTemplate::short("f").takes_value()];
        let err = parse(&args[..len], templates, &none()).unwrap_err();
        assert!(matches!(err, Error::MissingArgument(..)), "{:?}", &args[..len]);
    }
}

#[test]
fn missing_required_option() {
    let templates = &mut [OptionTemplate::short("f").required()];
    let err = parse(&["prog"], templates, &none()).unwrap_err();
    assert!(matches!(err, Error::RequiredOptionMissing(ref name) if name == "f"));

    let err = parse(&["prog", "-g"], templates, &none()).unwrap_err();
    assert!(matches!(err, Error::UnknownOption(..)));
}

#[test]
fn required_flag_satisfied_by_presence() {
    let templates = &mut [OptionTemplate::short("f").required()];
    assert_eq!(parse(&["prog", "-f"], templates, &none()).unwrap(), 2);
}

#[test]
fn required_value_needs_a_value() {
    let templates = &mut [
        OptionTemplate::short("a"),
        OptionTemplate::long("name").takes_value().required(),
    ];
    let err = parse(&["prog", "-a"], templates, &none()).unwrap_err();
    assert!(matches!(err, Error::RequiredOptionMissing(ref name) if name == "name"));
}

#[test]
fn duplicate_templates() {
    let templates = &mut [OptionTemplate::new("f", "foo"), OptionTemplate::new("f", "foo")];
    let err = parse(&["prog", "-f"], templates, &none()).unwrap_err();
    assert!(err.is_precondition());
    assert!(matches!(err, Error::DuplicateShortKey(ref key) if key == "f"));
    assert!(templates.iter().all(|t| !t.present));
}

#[test]
fn no_templates() {
    let templates: &mut [OptionTemplate] = &mut [];
    assert_eq!(parse(&["prog", "-x", "y"], templates, &none()).unwrap(), 0);
}

#[test]
fn positional_boundary() {
    let templates = &mut [
        OptionTemplate::short("v"),
        OptionTemplate::short("f").takes_value(),
    ];
    let args = &["prog", "-v", "input.txt", "-f", "x", "-u"];
    assert_eq!(parse(args, templates, &none()).unwrap(), 2);
    assert!(!templates[1].present);
}

#[test]
fn default_config() {
    let temp = config_file("f HelloWorld\n");
    let config = ConfigSource::default().with_default_path(temp.path());

    let templates = &mut [OptionTemplate::short("f").takes_value()];
    assert_eq!(parse(&["prog"], templates, &config).unwrap(), 1);
    assert_eq!(templates[0].value(), Some("HelloWorld"));
}

#[test]
fn command_line_overrides_default_config() {
    let temp = config_file("f HelloWorld\n");
    let config = ConfigSource::default().with_default_path(temp.path());

    let templates = &mut [OptionTemplate::short("f").takes_value()];
    parse(&["prog", "-f", "NotHelloWorld"], templates, &config).unwrap();
    assert_eq!(templates[0].value(), Some("NotHelloWorld"));
}

#[test]
fn config_option() {
    let temp = config_file("f HelloWorld\n");
    let path = temp.path().display().to_string();

    let templates = &mut [
        OptionTemplate::short("f").takes_value(),
        OptionTemplate::short("c").takes_value(),
    ];
    let config = ConfigSource::default().with_option(1);

    assert_eq!(parse(&["prog", "-c", &path], templates, &config).unwrap(), 3);
    assert_eq!(templates[0].value(), Some("HelloWorld"));
    assert_eq!(templates[1].value(), Some(&*path));
}

#[test]
fn config_option_shadows_default() {
    let explicit = config_file("f explicit\n");
    let default = config_file("f default\nv\n");
    let path = explicit.path().display().to_string();

    let templates = &mut [
        OptionTemplate::short("f").takes_value(),
        OptionTemplate::short("c").takes_value(),
        OptionTemplate::short("v"),
    ];
    let config = ConfigSource::default()
        .with_option(1)
        .with_default_path(default.path());

    parse(&["prog"], templates, &config).unwrap();
    assert_eq!(templates[0].value(), Some("default"));
    assert!(templates[2].present);

    release(templates);
    parse(&["prog", "-c", &path], templates, &config).unwrap();
    assert_eq!(templates[0].value(), Some("explicit"));
    assert!(!templates[2].present);
}

#[test]
fn missing_default_config_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigSource::default().with_default_path(dir.path().join("missing.conf"));

    let templates = &mut [OptionTemplate::short("f").takes_value()];
    assert_eq!(parse(&["prog"], templates, &config).unwrap(), 1);
    assert_eq!(templates[0].value(), None);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.conf").display().to_string();

    let templates = &mut [OptionTemplate::short("c").takes_value()];
    let config = ConfigSource::default().with_option(0);

    let err = parse(&["prog", "-c", &path], templates, &config).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains(&*path));
    assert_eq!(templates[0].value(), Some(&*path));
}

#[test]
fn malformed_config_keeps_earlier_lines() {
    let temp = config_file("a 1\nb\n");
    let config = ConfigSource::default().with_default_path(temp.path());

    let templates = &mut [
        OptionTemplate::short("a").takes_value(),
        OptionTemplate::short("b").takes_value(),
    ];
    let err = parse(&["prog"], templates, &config).unwrap_err();
    assert!(matches!(err, Error::Format { line: 2, .. }));
    assert_eq!(templates[0].value(), Some("1"));
}

#[test]
fn config_satisfies_required() {
    let temp = config_file("# comment-ish keys are just unknown\nname ferris\n");
    let config = ConfigSource::default().with_default_path(temp.path());

    let templates = &mut [OptionTemplate::new("n", "name").takes_value().required()];
    parse(&["prog"], templates, &config).unwrap();
    assert_eq!(templates[0].value(), Some("ferris"));
}

#[test]
fn config_lines_with_invalid_utf8() {
    let mut temp = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
    temp.write_all(b"comment caf\xe9\nf Hello\xffWorld\ng HelloWorld\n").unwrap();
    let config = ConfigSource::default().with_default_path(temp.path());

    let templates = &mut [
        OptionTemplate::short("f").takes_value(),
        OptionTemplate::short("g").takes_value(),
    ];
    assert_eq!(parse(&["prog"], templates, &config).unwrap(), 1);
    assert_eq!(templates[0].value(), Some("Hello\u{fffd}World"));
    assert_eq!(templates[1].value(), Some("HelloWorld"));
}

#[test]
fn args_from_strings() {
    let args = vec![OsString::from("prog"), "-f".into(), "x".into()];
    assert_eq!(args_from(args).unwrap(), vec!["prog", "-f", "x"]);
}

#[cfg(unix)]
#[test]
fn args_from_invalid_unicode() {
    use std::os::unix::ffi::OsStringExt as _;

    let args = vec![
        OsString::from("prog"),
        OsString::from("-s"),
        OsString::from_vec(vec![b'a', 0xff]),
    ];
    match args_from(args).unwrap_err() {
        Error::NotUnicode(arg) => assert_eq!(arg, "a\u{fffd}"),
        err => panic!("unexpected error: {}", err),
    }
}
