//! Product configuration trait for CLI binaries
//!
//! The binary supplies the identity of the product and the upstream
//! app-creation command the pipeline wraps.

/// Configuration trait for the scaffolding product
///
/// Implementors define:
/// - Product identity (display name, description)
/// - The upstream scaffold command and its template argument
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Executable used to run the upstream scaffold package
    fn scaffold_runner(&self) -> &'static str {
        "npx"
    }

    /// Upstream package that generates the base project
    fn scaffold_package(&self) -> &'static str;

    /// Template passed to the upstream package via `--template`
    fn scaffold_template(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, app_name: &str) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;
}
