//! Base `src/` layout: UI primitives, screens, hooks, utilities, theme constants and shared types

use super::step;
use crate::templates::{self, Template, TemplateWriter};
use anyhow::Result;
use std::path::Path;

/// Directories created even when nothing else lands in them
pub const DIRECTORIES: &[&str] = &[
    "src/components/ui",
    "src/screens",
    "src/hooks",
    "src/utils",
    "src/constants",
    "src/types",
];

pub const TEMPLATES: &[Template] = &[
    Template::new(
        "src/components/ui/Button.tsx",
        include_str!("../../templates/folder_structure/src/components/ui/Button.tsx"),
    ),
    Template::new(
        "src/components/ui/Input.tsx",
        include_str!("../../templates/folder_structure/src/components/ui/Input.tsx"),
    ),
    Template::new(
        "src/components/ui/Card.tsx",
        include_str!("../../templates/folder_structure/src/components/ui/Card.tsx"),
    ),
    Template::new(
        "src/components/ui/index.ts",
        include_str!("../../templates/folder_structure/src/components/ui/index.ts"),
    ),
    Template::new(
        "src/screens/LoginScreen.tsx",
        include_str!("../../templates/folder_structure/src/screens/LoginScreen.tsx"),
    ),
    Template::new(
        "src/screens/SignupScreen.tsx",
        include_str!("../../templates/folder_structure/src/screens/SignupScreen.tsx"),
    ),
    Template::new(
        "src/screens/HomeScreen.tsx",
        include_str!("../../templates/folder_structure/src/screens/HomeScreen.tsx"),
    ),
    Template::new(
        "src/screens/index.ts",
        include_str!("../../templates/folder_structure/src/screens/index.ts"),
    ),
    Template::new(
        "src/hooks/useToggle.ts",
        include_str!("../../templates/folder_structure/src/hooks/useToggle.ts"),
    ),
    Template::new(
        "src/utils/helpers.ts",
        include_str!("../../templates/folder_structure/src/utils/helpers.ts"),
    ),
    Template::new(
        "src/constants/theme.ts",
        include_str!("../../templates/folder_structure/src/constants/theme.ts"),
    ),
    Template::new(
        "src/types/index.ts",
        include_str!("../../templates/folder_structure/src/types/index.ts"),
    ),
];

pub async fn apply(project_dir: &Path) -> Result<()> {
    step("Creating folder structure...");

    let writer = TemplateWriter::new(project_dir);
    for dir in DIRECTORIES {
        writer.ensure_dir(dir).await?;
    }

    templates::write_all(&writer, TEMPLATES).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_creates_directories_and_files() {
        let tmp = TempDir::new().unwrap();
        apply(tmp.path()).await.unwrap();

        for dir in DIRECTORIES {
            assert!(tmp.path().join(dir).is_dir(), "missing {}", dir);
        }
        for template in TEMPLATES {
            let written = std::fs::read_to_string(tmp.path().join(template.path)).unwrap();
            assert_eq!(written, template.content);
        }
    }

    #[test]
    fn test_ui_index_exports_primitives() {
        let index = TEMPLATES
            .iter()
            .find(|t| t.path == "src/components/ui/index.ts")
            .unwrap();
        for name in ["Button", "Input", "Card"] {
            assert!(index.content.contains(&format!("export {{ {} }}", name)));
        }
    }

    #[test]
    fn test_regex_escapes_survive() {
        let helpers = TEMPLATES
            .iter()
            .find(|t| t.path == "src/utils/helpers.ts")
            .unwrap();
        assert!(helpers.content.contains(r"/\S+@\S+\.\S+/"));
    }
}
