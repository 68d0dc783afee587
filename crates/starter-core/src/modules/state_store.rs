//! Zustand global store

use super::step;
use crate::runtime::{CommandRunner, Installer};
use crate::templates::{self, Template, TemplateWriter};
use anyhow::Result;
use std::path::Path;

pub const DEPENDENCIES: &[&str] = &["zustand"];

pub const TEMPLATES: &[Template] = &[Template::new(
    "src/store/useAppStore.ts",
    include_str!("../../templates/state_store/src/store/useAppStore.ts"),
)];

pub async fn apply<R: CommandRunner>(project_dir: &Path, runner: &R) -> Result<()> {
    step("Installing Zustand...");
    Installer::new(runner, project_dir).install(DEPENDENCIES).await?;

    step("Creating store template...");
    templates::write_all(&TemplateWriter::new(project_dir), TEMPLATES).await
}
