//! Fragment-based content assembly.
//!
//! Every generated file is described as an ordered list of fragments, each
//! of which may be conditional. Omitted fragments leave no trace in the
//! output: no blank placeholder lines, no dangling separators.

/// Accumulates text fragments and renders them as a finished file.
#[derive(Debug, Default, Clone)]
pub struct ContentBuilder {
    fragments: Vec<String>,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single line.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.fragments.push(text.into());
        self
    }

    pub fn line_if(self, condition: bool, text: impl Into<String>) -> Self {
        if condition { self.line(text) } else { self }
    }

    /// Append a rendered line only when `value` is present.
    pub fn line_if_some<T>(self, value: Option<T>, render: impl FnOnce(T) -> String) -> Self {
        match value {
            Some(value) => self.line(render(value)),
            None => self,
        }
    }

    /// Append a multi-line block. One leading and all trailing newlines are
    /// dropped so raw string literals can start on their own line.
    pub fn block(mut self, text: &str) -> Self {
        let text = text.strip_prefix('\n').unwrap_or(text);
        self.fragments.push(text.trim_end_matches('\n').to_string());
        self
    }

    pub fn block_if(self, condition: bool, text: &str) -> Self {
        if condition { self.block(text) } else { self }
    }

    pub fn blank(self) -> Self {
        self.line("")
    }

    /// Append a nested group of fragments only when `condition` holds.
    pub fn section_if(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition { f(self) } else { self }
    }

    /// Render the file, always terminated by exactly one newline.
    pub fn build(self) -> String {
        let mut out = self.fragments.join("\n");
        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        out.push('\n');
        out
    }
}

/// Join the present parts of an inline list.
///
/// `join_present(", ", [Some("auth"), None, Some("handler")])` yields
/// `"auth, handler"`.
pub fn join_present<'a>(separator: &str, parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(separator)
}
