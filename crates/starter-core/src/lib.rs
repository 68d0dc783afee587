//! Starter Core - Shared library for the Expo starter scaffolding CLI
//!
//! This library wraps `create-expo-app` and layers a fixed set of template
//! modules (folder structure, routing, styling, state, HTTP client, env
//! config) on top of the generated project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template writing, JSON patching, command execution
//! - **Layer 2: Workflow Orchestration** - `Module` variants and the `Orchestrator`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use starter_core::{Orchestrator, ProjectConfig, ShellRunner};
//!
//! let config = ProjectConfig::new("demo")?;
//! let orchestrator = Orchestrator::new(&MyProduct, ShellRunner);
//! let project_dir = orchestrator.execute(&config, &std::env::current_dir()?).await?;
//! ```

pub mod config;
pub mod modules;
pub mod orchestrator;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ProjectConfig;
pub use modules::Module;
pub use orchestrator::Orchestrator;
pub use product::ProductConfig;
pub use runtime::{CommandError, CommandOptions, CommandRunner, ShellRunner};
pub use templates::TemplateWriter;

#[cfg(feature = "tui")]
pub use tui::run;
