//! `.env` files and a typed accessor for `EXPO_PUBLIC_*` variables

use super::step;
use crate::templates::{self, Template, TemplateWriter};
use anyhow::Result;
use std::path::Path;

const ENV_FILE: &str = include_str!("../../templates/env_config/.env.example");

/// `.env` and `.env.example` start out identical
pub const TEMPLATES: &[Template] = &[
    Template::new(".env.example", ENV_FILE),
    Template::new(".env", ENV_FILE),
    Template::new(
        "src/config/env.ts",
        include_str!("../../templates/env_config/src/config/env.ts"),
    ),
];

pub async fn apply(project_dir: &Path) -> Result<()> {
    step("Creating .env files...");
    templates::write_all(&TemplateWriter::new(project_dir), TEMPLATES).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_env_files_identical() {
        let tmp = TempDir::new().unwrap();
        apply(tmp.path()).await.unwrap();

        let env = std::fs::read_to_string(tmp.path().join(".env")).unwrap();
        let example = std::fs::read_to_string(tmp.path().join(".env.example")).unwrap();
        assert_eq!(env, example);
        assert!(env.contains("EXPO_PUBLIC_API_URL=https://api.example.com"));
        assert!(env.contains("EXPO_PUBLIC_APP_NAME=MyApp"));
        assert!(env.contains("EXPO_PUBLIC_APP_ENV=development"));
    }

    #[tokio::test]
    async fn test_accessor_has_fallbacks() {
        let tmp = TempDir::new().unwrap();
        apply(tmp.path()).await.unwrap();

        let accessor = std::fs::read_to_string(tmp.path().join("src/config/env.ts")).unwrap();
        assert!(accessor.contains("process.env.EXPO_PUBLIC_APP_NAME || 'MyApp'"));
        assert!(accessor.contains("process.env.EXPO_PUBLIC_APP_ENV || 'development'"));
    }
}
