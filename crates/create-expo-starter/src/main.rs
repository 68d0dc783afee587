//! create-expo-starter - Expo TypeScript app with a ready-made structure

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use starter_core::tui::CreateArgs;
use starter_core::ProductConfig;

/// Expo starter product configuration
#[derive(Clone)]
pub struct ExpoStarterConfig;

impl ProductConfig for ExpoStarterConfig {
    fn display_name(&self) -> &'static str {
        "Create Expo Starter"
    }

    fn scaffold_package(&self) -> &'static str {
        "create-expo-app@latest"
    }

    fn scaffold_template(&self) -> &'static str {
        "blank-typescript"
    }

    fn cli_description(&self) -> &'static str {
        "Create an Expo TypeScript app with routing, styling, state and API client set up"
    }

    fn next_steps(&self, app_name: &str) -> Vec<String> {
        vec![format!("cd {}", app_name), "npx expo start".to_string()]
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-expo-starter")]
#[command(about = "Create an Expo TypeScript app with routing, styling, state and API client set up")]
#[command(version)]
pub struct Args {
    /// Name of the app (prompted for when omitted)
    pub app_name: Option<String>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            app_name: args.app_name,
        }
    }
}

async fn create(args: Args) -> Result<()> {
    let config = ExpoStarterConfig;
    starter_core::run(&config, args.into()).await
}

/// One-line report with the whole context chain
fn error_line(err: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), err)
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let result = create(Args::parse()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("{}", error_line(&e));
        std::process::exit(1);
    }
}
