//! External commands and runtime detection
//!
//! This module provides:
//! - Shell command execution behind the `CommandRunner` trait
//! - npm install helpers
//! - Advisory Node.js / npm detection

pub mod check;
pub mod command;
pub mod installer;

#[cfg(test)]
pub(crate) mod testing;

pub use check::{check_node, check_npm, check_runtimes, RuntimeInfo};
pub use command::{command_line, CommandError, CommandOptions, CommandRunner, ShellRunner};
pub use installer::Installer;
