//! Recording `CommandRunner` used by the pipeline tests

use super::command::{command_line, CommandError, CommandOptions, CommandRunner};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Files the simulated `create-expo-app` leaves in a fresh project
pub const SCAFFOLD_FILES: &[&str] = &["App.tsx", "app.json", "index.ts", "package.json"];

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub line: String,
    pub cwd: Option<PathBuf>,
}

/// Records every command line; simulates the scaffold step on disk
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<RecordedCall>>,
    fail_on: Option<(String, i32)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any command whose line contains `pattern` with `code`
    pub fn failing_on(pattern: &str, code: i32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some((pattern.to_string(), code)),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.line).collect()
    }
}

fn simulate_create_expo_app(base: &Path, app_name: &str) {
    let dir = base.join(app_name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("app.json"),
        format!(
            "{{\n  \"expo\": {{\n    \"name\": \"{name}\",\n    \"slug\": \"{name}\",\n    \"version\": \"1.0.0\"\n  }}\n}}\n",
            name = app_name
        ),
    )
    .unwrap();
    std::fs::write(
        dir.join("package.json"),
        format!(
            "{{\n  \"name\": \"{}\",\n  \"version\": \"1.0.0\",\n  \"main\": \"index.ts\"\n}}\n",
            app_name
        ),
    )
    .unwrap();
    std::fs::write(dir.join("App.tsx"), "export default function App() {}\n").unwrap();
    std::fs::write(dir.join("index.ts"), "import App from './App';\n").unwrap();
}

impl CommandRunner for RecordingRunner {
    async fn run(
        &self,
        command: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> Result<(), CommandError> {
        let line = command_line(command, args);
        self.calls.lock().unwrap().push(RecordedCall {
            line: line.clone(),
            cwd: options.cwd.clone(),
        });

        if let Some((pattern, code)) = &self.fail_on {
            if line.contains(pattern.as_str()) {
                return Err(CommandError::Exit {
                    command: line,
                    code: *code,
                });
            }
        }

        if args.first().is_some_and(|a| a.starts_with("create-expo-app")) {
            if let (Some(cwd), Some(app_name)) = (&options.cwd, args.get(1)) {
                simulate_create_expo_app(cwd, app_name);
            }
        }

        Ok(())
    }
}
