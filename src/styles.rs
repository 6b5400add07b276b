//! The `--color` choice, and the styles the help text is painted with
use anstyle::{AnsiColor, Style};
use clap::ValueEnum;

/// When to color the help text
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color if the stream written to is a terminal that wants color
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    /// The choice for a stream whose automatic choice is `auto`
    #[must_use]
    pub fn resolve(self, auto: anstream::ColorChoice) -> anstream::ColorChoice {
        match self {
            ColorChoice::Auto => auto,
            ColorChoice::Always => anstream::ColorChoice::Always,
            ColorChoice::Never => anstream::ColorChoice::Never,
        }
    }
}

pub(crate) const NAME: Style = AnsiColor::Green.on_default().bold();
pub(crate) const ITEM: Style = AnsiColor::Green.on_default();
pub(crate) const TITLE: Style = AnsiColor::Yellow.on_default();

/// `text` between `style` and its reset
#[must_use]
pub(crate) fn paint(style: Style, text: &str) -> String {
    format!("{}{text}{}", style.render(), style.render_reset())
}
