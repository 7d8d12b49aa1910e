use crossterm::style::{Color, Stylize};

use crate::ui::theme::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl SemanticColor {
    fn resolve(self) -> Color {
        match self {
            SemanticColor::Success => colors::SUCCESS,
            SemanticColor::Error => colors::ERROR,
            SemanticColor::Warning => colors::WARNING,
            SemanticColor::Info => colors::INFO,
            SemanticColor::Dim => colors::DIM,
        }
    }
}

/// Text plus styling intent, resolved to ANSI only at render time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let mut styled = match self.color {
            Some(color) => self.text.as_str().with(color.resolve()),
            None => self.text.as_str().stylize(),
        };
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}
