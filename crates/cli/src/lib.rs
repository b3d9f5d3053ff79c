//! # reel-stats
//!
//! Command-line front end: argument parsing, the `Invocation` a run is
//! described by, and the code that executes it.

pub mod args;
pub mod invocation;
pub mod run;

pub use args::{Cli, Command};
pub use invocation::{FilterSpec, Invocation, ReportConfig, TerminalAction};
pub use run::{Outcome, run};
