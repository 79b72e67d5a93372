//! Terminal presentation layer
//!
//! Styling goes through a [`Palette`] so that output can be rendered plain
//! when stdout is not a terminal, when `--no-color` is given, and in tests.

use std::io::Write;

use console::Style;
use miette::Diagnostic;

use crate::error::{Result, RosterError};

/// Styles used by the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Unstyled output
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Styled when stdout supports colors
    pub fn detect() -> Self {
        Self::new(console::colors_enabled())
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    fn style(self, style: Style) -> Style {
        style.force_styling(self.enabled)
    }

    pub fn heading(self) -> Style {
        self.style(Style::new().bold().green())
    }

    pub fn option_key(self) -> Style {
        self.style(Style::new().bold().cyan())
    }

    pub fn success(self) -> Style {
        self.style(Style::new().green())
    }

    pub fn notice(self) -> Style {
        self.style(Style::new().yellow())
    }

    pub fn error(self) -> Style {
        self.style(Style::new().bold().red())
    }

    pub fn dim(self) -> Style {
        self.style(Style::new().dim())
    }
}

/// Write a recoverable error with its diagnostic help, if any
pub fn report_error(out: &mut impl Write, palette: Palette, err: &RosterError) -> Result<()> {
    writeln!(out, "{} {}", palette.error().apply_to("Error:"), err)?;
    if let Some(help) = err.help() {
        writeln!(out, "  {} {}", palette.dim().apply_to("help:"), help)?;
    }
    Ok(())
}
