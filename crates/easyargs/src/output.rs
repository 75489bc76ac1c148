use easy_args::OptionTemplate;
use std::collections::BTreeMap;

#[derive(Debug, serde::Serialize)]
pub struct Report<'a> {
    pub options: BTreeMap<&'a str, Entry<'a>>,
    pub rest: &'a [String],
}

#[derive(Debug, serde::Serialize)]
pub struct Entry<'a> {
    pub present: bool,
    pub value: Option<&'a str>,
}

impl<'a> Report<'a> {
    /// Options are keyed by their long key when they have one
    pub fn new(templates: &'a [OptionTemplate], rest: &'a [String]) -> Self {
        let options = templates
            .iter()
            .map(|t| {
                let entry = Entry {
                    present: t.present,
                    value: t.value(),
                };
                (t.long_key().unwrap_or_else(|| t.name()), entry)
            })
            .collect();

        Self { options, rest }
    }
}
