//! The `Cli` struct turns a command line into a call to one of the
//! `SetOperations` methods, and reports the outcome as a `Status`.
//!
//! Everything `Cli` touches from the outside is injected: its two output
//! streams, and the function that builds a calculator from two paths and a
//! separator. `Cli::new` supplies `SetCalculator::from_paths`; tests supply
//! doubles with `Cli::with_calculator`. Whether help may be colored when the
//! user leaves it to `--color auto` is decided per stream by the caller; see
//! `Cli::with_auto_colors`.
use anyhow::{Context, Result};
use log::debug;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use crate::args::{self, Args, OpName};
use crate::calculator::{SetCalculator, SetOperations};
use crate::help;
use crate::separator::Separator;
use crate::styles::ColorChoice;

/// The outcome of `Cli::run`, which `main` turns into the process exit code.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Status {
    /// The operation succeeded, or help or the version was printed
    Success,
    /// The command line had the wrong number of operands, or a bad option
    Usage,
    /// An input file couldn't be read, or the result couldn't be written
    Failure,
    /// The operation named on the command line doesn't exist
    UnknownOperation,
}

impl Status {
    /// The process exit code for this status
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Usage => 1,
            Status::Failure => 2,
            Status::UnknownOperation => 3,
        }
    }
}

/// `CalculatorFactory` builds a calculator for the files at two paths,
/// splitting both with the given separator.
pub type CalculatorFactory = Box<dyn Fn(&Path, &Path, Separator) -> Result<Box<dyn SetOperations>>>;

fn calculator_from_paths(a: &Path, b: &Path, separator: Separator) -> Result<Box<dyn SetOperations>> {
    Ok(Box::new(SetCalculator::from_paths(a, b, separator)?))
}

/// `Cli` writes results, help, and version to `out`, and complaints to `err`.
pub struct Cli<O: Write, E: Write> {
    out: O,
    err: E,
    out_color: anstream::ColorChoice,
    err_color: anstream::ColorChoice,
    new_calculator: CalculatorFactory,
}

impl<O: Write, E: Write> Cli<O, E> {
    /// A `Cli` that reads its operands from the file system, and doesn't
    /// color help unless asked to with `--color always`
    pub fn new(out: O, err: E) -> Self {
        Cli {
            out,
            err,
            out_color: anstream::ColorChoice::Never,
            err_color: anstream::ColorChoice::Never,
            new_calculator: Box::new(calculator_from_paths),
        }
    }

    /// Set what `--color auto` means for `out` and for `err`, typically
    /// `anstream::AutoStream::choice` of the streams behind them
    #[must_use]
    pub fn with_auto_colors(mut self, out: anstream::ColorChoice, err: anstream::ColorChoice) -> Self {
        self.out_color = out;
        self.err_color = err;
        self
    }

    /// Replace the function used to build a calculator
    #[must_use]
    pub fn with_calculator(
        mut self,
        new_calculator: impl Fn(&Path, &Path, Separator) -> Result<Box<dyn SetOperations>> + 'static,
    ) -> Self {
        self.new_calculator = Box::new(new_calculator);
        self
    }

    /// Parse `args` (whose first item is the program name), perform the
    /// requested operation, and print its result followed by a newline.
    ///
    /// * No operands at all, `--help`, or `--version` print to `out`.
    /// * A bad option or the wrong number of operands prints the help text
    ///   to `err`, as does an unknown operation name.
    /// * If either file can't be read, that's reported to `err`.
    pub fn run<I, T>(&mut self, args: I) -> Status
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.try_run(args) {
            Ok(status) => status,
            Err(e) => {
                // Nothing more to do if even this fails
                let _ = writeln!(self.err, "sop: {e:#}");
                Status::Failure
            }
        }
    }

    fn try_run<I, T>(&mut self, args: I) -> Result<Status>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let args = match args::parse_from(&args) {
            Ok(args) => args,
            Err(e) => {
                write!(self.err, "{e}")?;
                writeln!(self.err)?;
                let color = args::color_from(&args).unwrap_or(ColorChoice::Auto);
                return self.usage(color, Status::Usage);
            }
        };
        let Args { separator, color, help: wants_help, version, operands } = args;

        if version {
            writeln!(self.out, "{}", anstream::adapter::strip_str(&help::version()))?;
            return Ok(Status::Success);
        }
        if wants_help || operands.is_empty() {
            help::write_to(&mut self.out, color.resolve(self.out_color))?;
            self.out.flush()?;
            return Ok(Status::Success);
        }
        let [operation, path_a, path_b] = operands.as_slice() else {
            return self.usage(color, Status::Usage);
        };
        let Some(operation) = OpName::from_name(operation) else {
            writeln!(self.err, "sop: unknown operation: {}\n", operation.to_string_lossy())?;
            return self.usage(color, Status::UnknownOperation);
        };

        // `parse_from` has already refused an empty separator
        let separator = Separator::new(separator)?;
        debug!("{operation:?} of {path_a:?} and {path_b:?}, separated by {separator:?}");
        let calculator = match (self.new_calculator)(Path::new(path_a), Path::new(path_b), separator) {
            Ok(calculator) => calculator,
            Err(e) => {
                writeln!(self.err, "Unable to perform operation: {e:#}")?;
                return Ok(Status::Failure);
            }
        };

        let result = match operation {
            OpName::Union => calculator.union(),
            OpName::Intersection => calculator.intersection(),
            OpName::Difference => calculator.difference(),
        };
        self.out.write_all(&result).context("failed writing the result")?;
        self.out.write_all(b"\n").context("failed writing the result")?;
        self.out.flush().context("failed writing the result")?;
        Ok(Status::Success)
    }

    /// Print the help text to `err` and return `status`
    fn usage(&mut self, color: ColorChoice, status: Status) -> Result<Status> {
        help::write_to(&mut self.err, color.resolve(self.err_color))?;
        self.err.flush()?;
        Ok(status)
    }
}
