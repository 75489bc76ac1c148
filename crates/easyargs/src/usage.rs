use easy_args::OptionTemplate;

pub struct Usage<'a> {
    program: &'a str,
    tail: &'a str,
    templates: &'a [OptionTemplate],
}

impl<'a> Usage<'a> {
    pub const fn new(program: &'a str, tail: &'a str, templates: &'a [OptionTemplate]) -> Self {
        Self {
            program,
            tail,
            templates,
        }
    }

    fn flags(template: &OptionTemplate) -> String {
        let mut out = match (template.short_key(), template.long_key()) {
            (Some(short), Some(long)) => format!("-{}, --{}", short, long),
            (Some(short), None) => format!("-{}", short),
            (None, Some(long)) => format!("    --{}", long),
            (None, None) => String::new(),
        };
        if template.takes_value {
            out.push_str(" <value>");
        }
        out
    }
}

impl<'a> std::fmt::Display for Usage<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "usage: {} [options] {}", self.program, self.tail)?;
        writeln!(f)?;
        writeln!(f, "options:")?;

        let flags = self.templates.iter().map(Self::flags).collect::<Vec<_>>();
        let width = flags.iter().map(String::len).max().unwrap_or_default();

        for (template, flags) in self.templates.iter().zip(&flags) {
            let mut line = format!("  {:width$}", flags, width = width);
            if let Some(description) = template.description.as_deref() {
                line.push_str("  ");
                line.push_str(description);
            }
            if template.required {
                line.push_str(" (required)");
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
