//! Expo Router: file-based routes under `app/`, router entry point and URL scheme

use super::{step, APP_JSON, PACKAGE_JSON};
use crate::runtime::{CommandRunner, Installer};
use crate::templates::{self, deep_merge, Template, TemplateWriter};
use anyhow::Result;
use serde_json::{json, Value};
use std::path::Path;

pub const DEPENDENCIES: &[&str] = &[
    "expo-router",
    "expo-linking",
    "expo-constants",
    "react-native-screens",
];

/// Used when `app.json` carries no usable slug
pub const DEFAULT_SCHEME: &str = "myapp";

/// Entry point expo-router expects in `package.json`
pub const ROUTER_ENTRY: &str = "expo-router/entry";

/// Entry file from the blank template, superseded by `app/`
pub const LEGACY_ENTRY: &str = "App.tsx";

pub const TEMPLATES: &[Template] = &[
    Template::new(
        "app/_layout.tsx",
        include_str!("../../templates/navigation/app/_layout.tsx"),
    ),
    Template::new(
        "app/index.tsx",
        include_str!("../../templates/navigation/app/index.tsx"),
    ),
    Template::new(
        "app/login.tsx",
        include_str!("../../templates/navigation/app/login.tsx"),
    ),
    Template::new(
        "app/signup.tsx",
        include_str!("../../templates/navigation/app/signup.tsx"),
    ),
    Template::new(
        "app/home.tsx",
        include_str!("../../templates/navigation/app/home.tsx"),
    ),
];

/// Deep-link scheme for an Expo config: its slug, or `DEFAULT_SCHEME`
pub fn scheme_for(app_json: &Value) -> &str {
    app_json
        .pointer("/expo/slug")
        .and_then(Value::as_str)
        .filter(|slug| !slug.is_empty())
        .unwrap_or(DEFAULT_SCHEME)
}

/// Patch that sets `expo.scheme`
pub fn scheme_patch(app_json: &Value) -> Value {
    json!({ "expo": { "scheme": scheme_for(app_json) } })
}

pub async fn apply<R: CommandRunner>(project_dir: &Path, runner: &R) -> Result<()> {
    step("Installing Expo Router...");
    Installer::new(runner, project_dir).install(DEPENDENCIES).await?;

    step("Creating Expo Router structure...");
    let writer = TemplateWriter::new(project_dir);
    writer.ensure_dir("app").await?;
    templates::write_all(&writer, TEMPLATES).await?;

    if writer.exists(APP_JSON).await? {
        let mut app_json = writer.read_json(APP_JSON).await?;
        let patch = scheme_patch(&app_json);
        deep_merge(&mut app_json, &patch);
        writer.write_json(APP_JSON, &app_json).await?;
    }

    if writer.exists(PACKAGE_JSON).await? {
        writer
            .patch_json(PACKAGE_JSON, &json!({ "main": ROUTER_ENTRY }))
            .await?;
    }

    writer.remove_if_exists(LEGACY_ENTRY).await?;

    Ok(())
}
