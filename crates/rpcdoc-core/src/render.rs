//! Rendering collaborators that materialize a method page
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::method::MethodRecord;
use crate::templates::{TemplateRegistry, METHOD_TEMPLATE};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Renders a method through a template registry into a destination path
pub trait MethodRenderer {
    fn render(&self, templates: &TemplateRegistry, method: &MethodRecord, path: &Path) -> anyhow::Result<()>;
}

impl<R: MethodRenderer + ?Sized> MethodRenderer for &R {
    fn render(&self, templates: &TemplateRegistry, method: &MethodRecord, path: &Path) -> anyhow::Result<()> {
        (**self).render(templates, method, path)
    }
}

/// Writes the rendered method page to disk, replacing any existing file.
///
/// The destination directory must already exist.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileRenderer;

impl MethodRenderer for FileRenderer {
    fn render(&self, templates: &TemplateRegistry, method: &MethodRecord, path: &Path) -> anyhow::Result<()> {
        let template = templates
            .method_template()
            .with_context(|| format!("no '{}' template registered", METHOD_TEMPLATE))?;

        let content = template
            .render(method)
            .with_context(|| format!("template failed for method {}", method.name()))?;

        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;

        tracing::debug!(method = method.name(), path = %path.display(), "Rendered method page");
        Ok(())
    }
}
