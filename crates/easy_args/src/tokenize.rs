/// The significant part of a config line
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    pub key: &'a str,
    pub value: Option<&'a str>,
}

/// Splits a line into its first two ASCII whitespace separated tokens.
///
/// Returns `None` for blank lines. Anything after the value is ignored.
pub fn tokenize(line: &str) -> Option<Line<'_>> {
    let mut iter = line.split_ascii_whitespace();
    let key = iter.next()?;
    Some(Line {
        key,
        value: iter.next(),
    })
}
