//! Runs the scaffold command, then applies the selected modules in order
//!
//! Every step must succeed before the next starts. The first failure aborts
//! the run and whatever was already written stays on disk.

use crate::config::ProjectConfig;
use crate::modules::{selected_modules, Module};
use crate::product::ProductConfig;
use crate::runtime::{CommandOptions, CommandRunner};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Sequences one scaffolding run
pub struct Orchestrator<'a, C, R> {
    product: &'a C,
    runner: R,
}

impl<'a, C: ProductConfig, R: CommandRunner> Orchestrator<'a, C, R> {
    pub fn new(product: &'a C, runner: R) -> Self {
        Self { product, runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Scaffold the project inside `base_dir` and apply every selected module
    pub async fn execute(&self, config: &ProjectConfig, base_dir: &Path) -> Result<PathBuf> {
        let project_dir = self.scaffold(config, base_dir).await?;
        self.apply_modules(config, &project_dir).await?;
        Ok(project_dir)
    }

    /// Invoke the upstream app-creation command and return the project path
    pub async fn scaffold(&self, config: &ProjectConfig, base_dir: &Path) -> Result<PathBuf> {
        println!(
            "{}",
            format!("Creating Expo app with {}...", self.product.scaffold_package()).blue()
        );

        let args = [
            self.product.scaffold_package(),
            config.app_name.as_str(),
            "--template",
            self.product.scaffold_template(),
        ];
        self.runner
            .run(
                self.product.scaffold_runner(),
                &args,
                &CommandOptions::in_dir(base_dir),
            )
            .await
            .context("Failed to create Expo app")?;

        println!("{} Expo TypeScript app created", "✔".green());

        resolve_project_dir(base_dir, &config.app_name)
    }

    /// Apply the modules `config` selects, stopping at the first failure
    pub async fn apply_modules(
        &self,
        config: &ProjectConfig,
        project_dir: &Path,
    ) -> Result<Vec<Module>> {
        let mut applied = Vec::new();

        for module in selected_modules(config) {
            println!("{}", module_header(module));
            module
                .apply(project_dir, &self.runner)
                .await
                .with_context(|| format!("Failed to configure {}", module.display_name()))?;

            println!("{} {} configured", "✔".green(), module);
            applied.push(module);
        }

        Ok(applied)
    }
}

fn module_header(module: Module) -> String {
    format!("[{}]", module.name()).dimmed().to_string()
}

/// Absolute path of the directory the scaffold command generates
pub fn resolve_project_dir(base_dir: &Path, app_name: &str) -> Result<PathBuf> {
    let dir = base_dir.join(app_name);
    if dir.is_absolute() {
        Ok(dir)
    } else {
        let current_dir =
            std::env::current_dir().context("Failed to resolve the current directory")?;
        Ok(current_dir.join(dir))
    }
}
