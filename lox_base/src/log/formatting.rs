//! Contains the ANSI escape code wrappers used to colorize console output.

use std::fmt::Display;

/// Represents a foreground color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Blue => "\x1B[34m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Is a struct implementing [`Display`] that writes the wrapped object between ANSI escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Painted<T> {
    /// The displayable object.
    pub display: T,

    /// The foreground color, if any.
    pub color: Option<Color>,

    /// Whether the text is written in bold.
    pub bold: bool,
}

impl<T> Painted<T> {
    /// Wraps the given displayable object without any style applied.
    #[must_use]
    pub fn new(display: T) -> Self {
        Self {
            display,
            color: None,
            bold: false,
        }
    }

    /// Applies the given color.
    #[must_use]
    pub fn color(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Makes the text bold.
    #[must_use]
    pub fn bold(self) -> Self { Self { bold: true, ..self } }
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.bold {
            f.write_str("\x1B[1m")?;
        }
        if let Some(color) = self.color {
            f.write_str(color.code())?;
        }

        write!(f, "{}", self.display)?;

        if self.bold || self.color.is_some() {
            f.write_str("\x1B[0m")?;
        }

        Ok(())
    }
}

/// Extension trait for wrapping any displayable object into a [`Painted`].
pub trait Paint: Sized {
    /// Wraps `self` into a [`Painted`] with the given color.
    fn paint(self, color: Color) -> Painted<Self> { Painted::new(self).color(color) }

    /// Wraps `self` into a bold [`Painted`].
    fn bold(self) -> Painted<Self> { Painted::new(self).bold() }
}

impl<T: Display> Paint for T {}
