//! Runtime detection for Node.js and npm
//!
//! The check is advisory: a missing runtime surfaces later as a command
//! failure, so nothing here aborts the run.

use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release supported by current Expo SDKs
pub const MIN_NODE_VERSION: &str = "18.0.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", "npm")
}

/// Parse version string, handling a leading 'v' (as printed by `node --version`)
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Warning text when the detected Node.js is older than `MIN_NODE_VERSION`
pub fn node_version_warning(node_version: &str) -> Option<String> {
    let detected = parse_version(node_version).ok()?;
    let minimum = Version::parse(MIN_NODE_VERSION).ok()?;

    if detected < minimum {
        Some(format!(
            "Node.js {} detected; Expo requires {} or newer",
            node_version.trim(),
            MIN_NODE_VERSION
        ))
    } else {
        None
    }
}

/// Detect Node.js and npm, returning what was found plus any warnings
pub fn check_runtimes() -> (Vec<RuntimeInfo>, Vec<String>) {
    let node = check_node();
    let npm = check_npm();
    let mut warnings = Vec::new();

    match node.version.as_deref() {
        Some(version) => warnings.extend(node_version_warning(version)),
        None => warnings.push("Node.js not found (install from https://nodejs.org)".to_string()),
    }
    if !npm.available {
        warnings.push("npm not found; dependency installation will fail".to_string());
    }

    (vec![node, npm], warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_strips_prefix() {
        assert_eq!(parse_version("v20.11.1").unwrap(), Version::new(20, 11, 1));
        assert_eq!(parse_version("10.2.4\n").unwrap(), Version::new(10, 2, 4));
        assert!(parse_version("not-a-version").is_err());
    }

    #[test]
    fn test_old_node_warns() {
        let warning = node_version_warning("v16.20.0");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains(MIN_NODE_VERSION));
    }

    #[test]
    fn test_supported_node_is_quiet() {
        assert!(node_version_warning("v18.0.0").is_none());
        assert!(node_version_warning("v22.3.0").is_none());
    }

    #[test]
    fn test_unparseable_node_version_is_quiet() {
        assert!(node_version_warning("garbage").is_none());
    }

    #[test]
    fn test_check_runtimes_reports_both() {
        let (runtimes, _warnings) = check_runtimes();
        let names: Vec<_> = runtimes.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Node.js", "npm"]);
    }
}
