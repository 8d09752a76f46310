//! Line-oriented Markdown builder used by the item pages

/// Display colour of unique item names
pub const UNIQUE_COLOR: &str = "#9f8f5f";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markdown {
    lines: Vec<String>,
}

impl Markdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// A paragraph: the text followed by an empty line
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
        self.lines.push(String::new());
    }

    pub fn list(&mut self, text: impl AsRef<str>) {
        self.lines.push(format!("- {}", text.as_ref()));
    }

    /// Visible vertical gap
    pub fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
        self.line("<br/>");
    }

    pub fn color(text: &str, color: &str) -> String {
        format!("<font color={}>{}</font>", color, text)
    }

    pub fn unique_color(text: &str) -> String {
        Self::color(text, UNIQUE_COLOR)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
