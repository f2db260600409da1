//! Platform-specific cleanup of resolved turn content.
//!
//! Some chat UIs render affordances (e.g. a "Copy code" button above every
//! code block) inside the message container, so their labels leak into the
//! text content. The cleaner strips those labels and limits blank runs.

/// Removes UI boilerplate and collapses runs of newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCleaner {
    boilerplate: Vec<String>,
    max_consecutive_newlines: usize,
}

impl ContentCleaner {
    /// Create a cleaner that removes every occurrence of the given labels.
    pub fn new<I, S>(boilerplate: I, max_consecutive_newlines: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            boilerplate: boilerplate
                .into_iter()
                .map(|s| -> String { s.into() })
                .filter(|s| !s.is_empty())
                .collect(),
            max_consecutive_newlines,
        }
    }

    /// Clean a piece of resolved content.
    pub fn clean(&self, text: &str) -> String {
        let mut stripped = text.replace("\r\n", "\n");
        for label in &self.boilerplate {
            if stripped.contains(label.as_str()) {
                stripped = stripped.replace(label.as_str(), "");
            }
        }

        let mut result = String::with_capacity(stripped.len());
        let mut newline_count = 0;
        for c in stripped.chars() {
            if c == '\n' {
                newline_count += 1;
                if newline_count <= self.max_consecutive_newlines {
                    result.push(c);
                }
            } else {
                newline_count = 0;
                result.push(c);
            }
        }
        result.trim().to_string()
    }
}
