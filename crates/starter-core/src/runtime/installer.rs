//! npm dependency installation

use super::command::{CommandError, CommandOptions, CommandRunner};
use std::path::Path;

/// Relaxes peer-dependency conflict resolution for every install
pub const LEGACY_PEER_DEPS: &str = "--legacy-peer-deps";

const NPM: &str = "npm";

/// Installs dependencies into one project directory
pub struct Installer<'a, R> {
    runner: &'a R,
    options: CommandOptions,
}

impl<'a, R: CommandRunner> Installer<'a, R> {
    pub fn new(runner: &'a R, project_dir: &Path) -> Self {
        Self {
            runner,
            options: CommandOptions::in_dir(project_dir),
        }
    }

    /// `npm install --legacy-peer-deps <deps>`; no-op for an empty list
    pub async fn install(&self, deps: &[&str]) -> Result<(), CommandError> {
        if deps.is_empty() {
            return Ok(());
        }
        let mut args = vec!["install", LEGACY_PEER_DEPS];
        args.extend_from_slice(deps);
        self.runner.run(NPM, &args, &self.options).await
    }

    /// `npm install -D --legacy-peer-deps <deps>`; no-op for an empty list
    pub async fn install_dev(&self, deps: &[&str]) -> Result<(), CommandError> {
        if deps.is_empty() {
            return Ok(());
        }
        let mut args = vec!["install", "-D", LEGACY_PEER_DEPS];
        args.extend_from_slice(deps);
        self.runner.run(NPM, &args, &self.options).await
    }

    /// Plain `npm install` over the whole manifest
    pub async fn reinstall(&self) -> Result<(), CommandError> {
        self.runner.run(NPM, &["install"], &self.options).await
    }
}
