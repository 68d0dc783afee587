//! Axios API client and example services

use super::step;
use crate::runtime::{CommandRunner, Installer};
use crate::templates::{self, Template, TemplateWriter};
use anyhow::Result;
use std::path::Path;

pub const DEPENDENCIES: &[&str] = &["axios"];

pub const TEMPLATES: &[Template] = &[
    Template::new(
        "src/api/client.ts",
        include_str!("../../templates/http_client/src/api/client.ts"),
    ),
    Template::new(
        "src/api/services.ts",
        include_str!("../../templates/http_client/src/api/services.ts"),
    ),
];

pub async fn apply<R: CommandRunner>(project_dir: &Path, runner: &R) -> Result<()> {
    step("Installing Axios...");
    Installer::new(runner, project_dir).install(DEPENDENCIES).await?;

    step("Creating API client template...");
    templates::write_all(&TemplateWriter::new(project_dir), TEMPLATES).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::testing::RecordingRunner;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_apply_writes_client_and_services() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();

        apply(tmp.path(), &runner).await.unwrap();

        let client = std::fs::read_to_string(tmp.path().join("src/api/client.ts")).unwrap();
        assert!(client.contains("process.env.EXPO_PUBLIC_API_URL || 'https://api.example.com'"));
        let services = std::fs::read_to_string(tmp.path().join("src/api/services.ts")).unwrap();
        assert!(services.contains("export const userService"));
        assert!(services.contains("export const authService"));
        assert_eq!(runner.lines(), vec!["npm install --legacy-peer-deps axios"]);
    }
}
