//! Method page export
//!
//! Computes the destination of a method page and drives a
//! [`MethodRenderer`] to write it. Renderer failures are wrapped in an
//! [`ExportError`] and returned as-is; nothing is retried.
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::error::ExportError;
use crate::method::MethodRecord;
use crate::render::{FileRenderer, MethodRenderer};
use crate::templates::TemplateRegistry;
use heck::ToKebabCase;
use std::path::{Path, PathBuf};

/// Extension of generated method pages
pub const PAGE_EXTENSION: &str = "mdx";

/// Kebab-case a method name for use as a file stem.
///
/// Word boundaries fall on lower-to-upper transitions, before the last
/// capital of an acronym run, and on any non-alphanumeric character. Digits
/// stay attached to the word before them, so `SendPaymentV2` becomes
/// `send-payment-v2`.
pub fn derive_file_name(name: &str) -> String {
    name.to_kebab_case()
}

/// `<output_dir>/<derive_file_name(name)>.mdx`
pub fn method_file_path(output_dir: &Path, method: &MethodRecord) -> PathBuf {
    output_dir.join(format!("{}.{}", method.file_name(), PAGE_EXTENSION))
}

/// Exports method pages through a renderer and a template registry
pub struct MethodExporter<'a, R = FileRenderer> {
    templates: &'a TemplateRegistry,
    renderer: R,
}

impl<'a> MethodExporter<'a, FileRenderer> {
    /// Exporter writing pages to disk
    pub fn new(templates: &'a TemplateRegistry) -> Self {
        Self::with_renderer(templates, FileRenderer)
    }
}

impl<'a, R: MethodRenderer> MethodExporter<'a, R> {
    pub fn with_renderer(templates: &'a TemplateRegistry, renderer: R) -> Self {
        Self { templates, renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render `method` into `output_dir`, returning the written path.
    pub fn export(&self, method: &MethodRecord, output_dir: &Path) -> Result<PathBuf, ExportError> {
        let path = method_file_path(output_dir, method);
        tracing::info!("Exporting method {} to {}", method.name(), path.display());

        self.renderer
            .render(self.templates, method, &path)
            .map_err(|source| ExportError::new(method.name(), &path, source))?;

        Ok(path)
    }
}
