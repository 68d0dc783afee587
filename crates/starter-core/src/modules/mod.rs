//! Template modules applied to a freshly generated Expo project
//!
//! The set is closed: two modules always run, four are toggled by
//! `ProjectConfig` flags. Each module installs its npm dependencies and
//! writes its static templates through `TemplateWriter`.

pub mod env_config;
pub mod folder_structure;
pub mod http_client;
pub mod navigation;
pub mod state_store;
pub mod styling;

use crate::config::ProjectConfig;
use crate::runtime::CommandRunner;
use crate::templates::Template;
use anyhow::Result;
use colored::Colorize;
use std::fmt;
use std::path::Path;

/// Expo config manifest generated by `create-expo-app`
pub const APP_JSON: &str = "app.json";

/// npm manifest generated by `create-expo-app`
pub const PACKAGE_JSON: &str = "package.json";

/// A unit of file and dependency changes applied to the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    FolderStructure,
    Navigation,
    Styling,
    StateStore,
    HttpClient,
    EnvConfig,
}

impl Module {
    /// Every module in application order
    pub const ALL: [Module; 6] = [
        Module::FolderStructure,
        Module::Navigation,
        Module::Styling,
        Module::StateStore,
        Module::HttpClient,
        Module::EnvConfig,
    ];

    /// Short identifier shown ahead of each module's progress lines
    pub fn name(&self) -> &'static str {
        match self {
            Module::FolderStructure => "folder-structure",
            Module::Navigation => "navigation",
            Module::Styling => "styling",
            Module::StateStore => "state-store",
            Module::HttpClient => "http-client",
            Module::EnvConfig => "env-config",
        }
    }

    /// Label used in success and failure messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Module::FolderStructure => "Folder Structure",
            Module::Navigation => "Navigation (Expo Router)",
            Module::Styling => "NativeWind",
            Module::StateStore => "Zustand",
            Module::HttpClient => "Axios",
            Module::EnvConfig => "Environment Config",
        }
    }

    /// Whether `config` turns this module on (unconditional modules always do)
    pub fn is_enabled(&self, config: &ProjectConfig) -> bool {
        match self {
            Module::FolderStructure | Module::Navigation => true,
            Module::Styling => config.use_native_wind,
            Module::StateStore => config.use_zustand,
            Module::HttpClient => config.use_axios,
            Module::EnvConfig => config.use_env_config,
        }
    }

    /// Static templates this module writes
    pub fn templates(&self) -> &'static [Template] {
        match self {
            Module::FolderStructure => folder_structure::TEMPLATES,
            Module::Navigation => navigation::TEMPLATES,
            Module::Styling => styling::TEMPLATES,
            Module::StateStore => state_store::TEMPLATES,
            Module::HttpClient => http_client::TEMPLATES,
            Module::EnvConfig => env_config::TEMPLATES,
        }
    }

    /// Relative paths of the files this module writes
    pub fn files(&self) -> Vec<&'static str> {
        self.templates().iter().map(|t| t.path).collect()
    }

    /// Apply the module to the project at `project_dir`
    pub async fn apply<R: CommandRunner>(&self, project_dir: &Path, runner: &R) -> Result<()> {
        match self {
            Module::FolderStructure => folder_structure::apply(project_dir).await,
            Module::Navigation => navigation::apply(project_dir, runner).await,
            Module::Styling => styling::apply(project_dir, runner).await,
            Module::StateStore => state_store::apply(project_dir, runner).await,
            Module::HttpClient => http_client::apply(project_dir, runner).await,
            Module::EnvConfig => env_config::apply(project_dir).await,
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Modules to apply for `config`, in application order
pub fn selected_modules(config: &ProjectConfig) -> Vec<Module> {
    Module::ALL
        .into_iter()
        .filter(|module| module.is_enabled(config))
        .collect()
}

fn step(message: &str) {
    println!("  {} {}", "->".blue(), message);
}
