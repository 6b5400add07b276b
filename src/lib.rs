//! `sop` treats each of two files as a set of elements, separated by newlines
//! or by a separator given on the command line, and prints their union,
//! intersection, or difference.
//!
//! The `SetCalculator` in the `calculator` module is the kernel of the
//! application. The `cli` module parses the command line (with help from
//! `args`) and hands the calculator to `main`; the `operands` module hides
//! file I/O details.
//!
//! Current Limitations:
//! * Both files are read into memory in their entirety.
//! * Elements are compared byte for byte: `café` written with a combining
//!   accent is a different element from `café` written with a precomposed one.
//! * Results come out in no particular order, and there's no option to sort
//!   them.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod calculator;
pub mod cli;
mod help;
pub mod operands;
pub mod separator;
pub mod styles;

pub use calculator::{SetCalculator, SetOperations};
pub use cli::{Cli, Status};
pub use separator::Separator;
