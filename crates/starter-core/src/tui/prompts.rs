//! Charm-style CLI prompts using cliclack

use crate::config::{normalize_app_name, validate_app_name, ProjectConfig};
use crate::orchestrator::Orchestrator;
use crate::product::ProductConfig;
use crate::runtime::{check, ShellRunner};
use anyhow::{Context, Result};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// App name given on the command line; prompted for when absent
    pub app_name: Option<String>,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(product: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(product.display_name())?;
    cliclack::log::info(product.cli_description())?;

    // Step 1: Collect configuration
    let config = collect_config(args.app_name.as_deref())?;
    cliclack::log::info(format!("Configuration\n{}", config))?;

    // Step 2: Advisory runtime check
    check_runtimes()?;

    // Step 3: Scaffold and apply modules
    let base_dir = std::env::current_dir().context("Failed to resolve the current directory")?;
    let orchestrator = Orchestrator::new(product, ShellRunner);
    let project_dir = orchestrator.execute(&config, &base_dir).await?;

    cliclack::log::success(format!(
        "Your Expo TypeScript app is ready in {}",
        project_dir.display()
    ))?;

    // Step 4: Show next steps
    print_next_steps(product, &config)?;

    Ok(())
}

/// Resolve the app name and the four feature flags
///
/// The app name prompt is skipped when `app_name` is a non-blank argument.
/// Feature confirms always run and default to yes.
pub fn collect_config(app_name: Option<&str>) -> Result<ProjectConfig> {
    let app_name = match app_name.and_then(normalize_app_name) {
        Some(name) => {
            cliclack::log::info(format!("App name: {}", name))?;
            name
        }
        None => cliclack::input("What is your app name?")
            .placeholder("my-app")
            .validate(|input: &String| validate_app_name(input))
            .interact()?,
    };

    let use_native_wind = confirm("Add NativeWind (Tailwind CSS for React Native)?")?;
    let use_zustand = confirm("Add Zustand (state management)?")?;
    let use_axios = confirm("Add Axios (API client)?")?;
    let use_env_config = confirm("Add environment variables support?")?;

    Ok(ProjectConfig::new(&app_name)?.with_features(
        use_native_wind,
        use_zustand,
        use_axios,
        use_env_config,
    ))
}

fn confirm(prompt: &str) -> Result<bool> {
    let answer: bool = cliclack::confirm(prompt).initial_value(true).interact()?;
    Ok(answer)
}

fn check_runtimes() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    let (runtimes, warnings) = check::check_runtimes();
    let runtime_info: Vec<String> = runtimes
        .iter()
        .map(|r| {
            if r.available {
                format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown"))
            } else {
                format!("{} (not installed)", r.name)
            }
        })
        .collect();
    spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));

    for warning in warnings {
        cliclack::log::warning(warning)?;
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(product: &C, config: &ProjectConfig) -> Result<()> {
    let steps = product.next_steps(&config.app_name);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
