//! Static templates and the writer that materializes them

pub mod writer;

pub use writer::{deep_merge, TemplateWriter};

/// One static file a module writes into the project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Path relative to the project root
    pub path: &'static str,
    /// Literal file content
    pub content: &'static str,
}

impl Template {
    pub const fn new(path: &'static str, content: &'static str) -> Self {
        Self { path, content }
    }
}

/// Write every template in order, stopping at the first failure
pub async fn write_all(writer: &TemplateWriter, templates: &[Template]) -> anyhow::Result<()> {
    for template in templates {
        writer.write(template.path, template.content).await?;
    }
    Ok(())
}
