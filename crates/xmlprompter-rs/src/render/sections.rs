//! Section-based prompt assembly.
//!
//! [`SectionBuilder`] assembles labeled blocks into a single prompt string,
//! joining them with double newlines and silently skipping empty content.
//! The markdown, structured, and plain renderers are all built on it; each
//! picks the label style that fits its format.

/// Builder for multi-section prompt bodies.
///
/// Sections are joined with double newlines. A section whose content is
/// empty is skipped entirely — no dangling headings or labels.
///
/// # Example
///
/// ```
/// use xmlprompter_rs::render::SectionBuilder;
///
/// let prompt = SectionBuilder::new()
///     .heading("Role", "Engineer")
///     .heading("Context", "")
///     .labeled("TASK", "Write a function")
///     .build();
///
/// assert!(prompt.contains("## Role"));
/// assert!(!prompt.contains("Context"));
/// assert!(prompt.contains("TASK: Write a function"));
/// ```
#[derive(Debug, Default)]
pub struct SectionBuilder {
    sections: Vec<String>,
}

impl SectionBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a markdown section: `## {heading}` followed by the content.
    ///
    /// Skipped if `content` is empty.
    pub fn heading(mut self, heading: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.sections.push(format!("## {heading}\n\n{content}"));
        }
        self
    }

    /// Append an inline labeled section: `{label}: {content}`.
    ///
    /// Skipped if `content` is empty.
    pub fn labeled(mut self, label: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.sections.push(format!("{label}: {content}"));
        }
        self
    }

    /// Append a block labeled section: `{label}:` with the content on the
    /// following lines.
    ///
    /// Skipped if `content` is empty.
    pub fn block(mut self, label: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.sections.push(format!("{label}:\n{content}"));
        }
        self
    }

    /// Append raw text without a label.
    ///
    /// Skipped if `content` is empty.
    pub fn raw(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.sections.push(content);
        }
        self
    }

    /// Build the final string by joining all sections with double newlines.
    pub fn build(self) -> String {
        self.sections.join("\n\n")
    }
}
