//! Every layer of a rendered line (one tag, the tag list, the date, the trace block,
//! the whole line) is its own user-supplied template. Templates are parsed once at
//! formatter construction and rendered on every log call.

/// Closed set of known substitution tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Handler,
    Tags,
    Tag,
    Datetime,
    Date,
    Time,
    Trace,
    File,
    Line,
    Module,
}

impl Placeholder {
    /// Template parsing matches brace-delimited names against these.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Handler => "handler",
            Self::Tags => "tags",
            Self::Tag => "tag",
            Self::Datetime => "datetime",
            Self::Date => "date",
            Self::Time => "time",
            Self::Trace => "trace",
            Self::File => "file",
            Self::Line => "line",
            Self::Module => "module",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Handler,
        Self::Tags,
        Self::Tag,
        Self::Datetime,
        Self::Date,
        Self::Time,
        Self::Trace,
        Self::File,
        Self::Line,
        Self::Module,
    ];
}

/// Parsing into segments once avoids re-scanning the template on every log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators, brackets, and unknown `{names}` pass through untouched.
    Literal(String),
    /// Known tokens are substituted at render time.
    Placeholder(Placeholder),
}

/// Pre-parsed template: parse once, render many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Turns `"[{date} {time}]"` into a segment list. Never fails: an unclosed `{`
    /// is kept as literal text.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut i = 0;
        let chars: Vec<char> = template.chars().collect();

        while i < chars.len() {
            if chars[i] == '{'
                && let Some(end) = chars[i..].iter().position(|&c| c == '}')
            {
                let end = i + end;
                let name: String = chars[i + 1..end].iter().collect();

                if !current.is_empty() {
                    segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                }

                if let Some(ph) = Self::match_placeholder(&name) {
                    segments.push(FormatSegment::Placeholder(ph));
                } else {
                    segments.push(FormatSegment::Literal(format!("{{{name}}}")));
                }

                i = end + 1;
                continue;
            }

            current.push(chars[i]);
            i += 1;
        }

        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self {
            source: template.to_string(),
            segments,
        }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// The template text as it was given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Substitutes values into the pre-parsed segments. Unset values render empty.
    #[must_use]
    pub fn render(&self, values: &FormatValues<'_>) -> String {
        let mut result = String::with_capacity(self.source.len());

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Handler => values.handler,
                        Placeholder::Tags => values.tags,
                        Placeholder::Tag => values.tag,
                        Placeholder::Datetime => values.datetime,
                        Placeholder::Date => values.date,
                        Placeholder::Time => values.time,
                        Placeholder::Trace => values.trace,
                        Placeholder::File => values.file,
                        Placeholder::Line => values.line,
                        Placeholder::Module => values.module,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

/// Typed value bag: every placeholder has a field, so a typo can't silently miss at runtime.
/// Borrowed because each value lives only for one render.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatValues<'a> {
    pub handler: &'a str,
    pub tags: &'a str,
    pub tag: &'a str,
    pub datetime: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub trace: &'a str,
    pub file: &'a str,
    pub line: &'a str,
    pub module: &'a str,
}

impl<'a> FormatValues<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn handler(mut self, handler: &'a str) -> Self {
        self.handler = handler;
        self
    }

    #[must_use]
    pub const fn tags(mut self, tags: &'a str) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub const fn tag(mut self, tag: &'a str) -> Self {
        self.tag = tag;
        self
    }

    #[must_use]
    pub const fn datetime(mut self, datetime: &'a str) -> Self {
        self.datetime = datetime;
        self
    }

    #[must_use]
    pub const fn date(mut self, date: &'a str) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub const fn time(mut self, time: &'a str) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub const fn trace(mut self, trace: &'a str) -> Self {
        self.trace = trace;
        self
    }

    /// Source-location fields for the trace sub-templates.
    #[must_use]
    pub const fn location(mut self, file: &'a str, line: &'a str, module: &'a str) -> Self {
        self.file = file;
        self.line = line;
        self.module = module;
        self
    }
}

/// Strips any trailing line breaks and appends exactly one `\n`.
#[must_use]
pub fn terminate_line(mut text: String) -> String {
    let trimmed = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(trimmed);
    text.push('\n');
    text
}
