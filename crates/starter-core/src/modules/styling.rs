//! NativeWind (Tailwind CSS for React Native): Babel, Metro and Tailwind config

use super::{step, APP_JSON};
use crate::runtime::{CommandRunner, Installer};
use crate::templates::{self, Template, TemplateWriter};
use anyhow::Result;
use serde_json::{json, Value};
use std::path::Path;

pub const DEPENDENCIES: &[&str] = &[
    "nativewind",
    "react-native-reanimated",
    "react-native-safe-area-context",
    "react-native-worklets",
];

pub const DEV_DEPENDENCIES: &[&str] = &[
    "babel-preset-expo",
    "tailwindcss@^3.4.17",
    "prettier-plugin-tailwindcss@^0.5.11",
];

pub const TEMPLATES: &[Template] = &[
    Template::new(
        "tailwind.config.js",
        include_str!("../../templates/styling/tailwind.config.js"),
    ),
    Template::new(
        "global.css",
        include_str!("../../templates/styling/global.css"),
    ),
    Template::new(
        "babel.config.js",
        include_str!("../../templates/styling/babel.config.js"),
    ),
    Template::new(
        "metro.config.js",
        include_str!("../../templates/styling/metro.config.js"),
    ),
    Template::new(
        "nativewind-env.d.ts",
        include_str!("../../templates/styling/nativewind-env.d.ts"),
    ),
];

/// Sets `expo.web.bundler`, creating `expo.web` only when it is absent
pub fn web_bundler_patch() -> Value {
    json!({ "expo": { "web": { "bundler": "metro" } } })
}

pub async fn apply<R: CommandRunner>(project_dir: &Path, runner: &R) -> Result<()> {
    step("Installing NativeWind dependencies...");
    let installer = Installer::new(runner, project_dir);
    installer.install(DEPENDENCIES).await?;
    installer.install_dev(DEV_DEPENDENCIES).await?;

    step("Writing Tailwind, Babel and Metro config...");
    let writer = TemplateWriter::new(project_dir);
    templates::write_all(&writer, TEMPLATES).await?;

    if writer.exists(APP_JSON).await? {
        step("Updating app.json...");
        writer.patch_json(APP_JSON, &web_bundler_patch()).await?;
    }

    // Pulls in babel-preset-expo's own presets after the explicit installs
    step("Reinstalling dependencies...");
    installer.reinstall().await?;

    Ok(())
}
