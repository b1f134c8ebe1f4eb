//! ANSI color helpers for terminal output.
use ansi_term::{Colour, Style};

/// Styles used by the timeline renderer.
///
/// The plain palette holds empty styles, which paint text without any escape
/// sequence, so both modes share one rendering path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub rule: Style,
    pub annotation: Style,
    pub timestamp: Style,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        if color {
            Self::decorated()
        } else {
            Self::plain()
        }
    }

    pub fn decorated() -> Self {
        Self {
            rule: Colour::Red.bold(),
            annotation: Colour::Green.bold(),
            timestamp: Colour::Cyan.bold(),
        }
    }

    pub fn plain() -> Self {
        Self {
            rule: Style::new(),
            annotation: Style::new(),
            timestamp: Style::new(),
        }
    }
}
