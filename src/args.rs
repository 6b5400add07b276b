//! Code to parse the command line using `clap`, and definitions of the parsed
//! result
//!
//! `clap`'s own help and version flags are turned off: `sop` prints its own
//! help text (see the `help` module), including after a usage error.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};
use std::ffi::{OsStr, OsString};

use crate::styles::ColorChoice;

/// Returns the parsed command line, or `clap`'s description of what's wrong
/// with it. The first item of `args` is the program name.
pub fn parse_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = CliArgs::try_parse_from(args)?;
    Ok(Args {
        separator: parsed.separator,
        color: parsed.color,
        help: parsed.help,
        version: parsed.version,
        operands: parsed.operands,
    })
}

/// The `--color` choice in a command line that `parse_from` rejected, so
/// that the usage message can still honor it. The last valid one wins, and
/// nothing after `--` counts.
#[must_use]
pub fn color_from(args: &[OsString]) -> Option<ColorChoice> {
    let mut choice = None;
    let mut args = args.iter().skip(1).map(|arg| arg.to_str());
    while let Some(arg) = args.next() {
        let value = match arg {
            Some("--") => break,
            Some("--color") => args.next().flatten(),
            Some(arg) => arg.strip_prefix("--color="),
            None => None,
        };
        if let Some(parsed) = value.and_then(|v| ColorChoice::from_str(v, false).ok()) {
            choice = Some(parsed);
        }
    }
    choice
}

/// `Args` contains the parsed command line
#[derive(Debug)]
pub struct Args {
    /// `separator` delimits elements in the input files and in the output
    pub separator: String,
    /// `color` says whether the help text should be colored
    pub color: ColorChoice,
    /// `help` is true if the user asked for help
    pub help: bool,
    /// `version` is true if the user asked for the version
    pub version: bool,
    /// `operands` is the operation name followed by the input files. Their
    /// number isn't checked here: the wrong number is a usage error, but no
    /// operands at all is a request for help.
    pub operands: Vec<OsString>,
}

/// The set operations `sop` knows about
#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
pub enum OpName {
    /// Print the elements present in either file
    Union,
    /// Print the elements present in both files
    Intersection,
    /// Print the elements present in the first file but not the second
    Difference,
}

impl OpName {
    /// The operation named `name`, if there is one. Names are case sensitive.
    #[must_use]
    pub fn from_name(name: &OsStr) -> Option<OpName> {
        let name = name.to_str()?;
        <OpName as ValueEnum>::from_str(name, false).ok()
    }
}

#[derive(Debug, Parser)]
#[command(name = "sop", disable_help_flag = true, disable_version_flag = true)]
/// `CliArgs` is the command line as `clap` sees it.
struct CliArgs {
    #[arg(short, long, default_value = "\n", value_parser = NonEmptyStringValueParser::new())]
    /// String used as element separator
    separator: String,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    /// When to color the help text
    color: ColorChoice,
    #[arg(short, long)]
    /// Print help
    help: bool,
    #[arg(short = 'V', long)]
    /// Print version
    version: bool,
    #[arg(name = "OPERATION AND FILES")]
    /// The operation followed by the two input files
    operands: Vec<OsString>,
}
