//! Landing page listing the method pages of one service
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::export::PAGE_EXTENSION;
use crate::markdown::clean_description;
use crate::method::MethodRecord;
use crate::normalizer::StreamingDirection;
use crate::service::ServiceContext;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of a service's landing page
pub const INDEX_FILE_NAME: &str = "index.md";

/// One method as listed on the landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub file_name: String,
    pub streaming: StreamingDirection,
    pub deprecated: bool,
}

impl IndexEntry {
    pub fn from_record(record: &MethodRecord) -> Self {
        Self {
            name: record.name().to_string(),
            file_name: record.file_name(),
            streaming: record.streaming_direction(),
            deprecated: record.is_deprecated(),
        }
    }
}

/// Landing page for a service: header, description and links to its methods
#[derive(Debug, Clone)]
pub struct ServiceIndex {
    title: String,
    package: String,
    description: String,
    entries: Vec<IndexEntry>,
}

impl ServiceIndex {
    pub fn new(service: &ServiceContext, description: &str) -> Self {
        Self {
            title: service.name().to_string(),
            package: service.package().to_string(),
            description: clean_description(description, true),
            entries: Vec::new(),
        }
    }

    /// List an exported method, in the order pages were written
    pub fn push(&mut self, record: &MethodRecord) {
        self.entries.push(IndexEntry::from_record(record));
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn render(&self) -> String {
        let mut page = format!("# {}\n\n", self.title);

        if !self.package.is_empty() {
            page.push_str(&format!("**Package:** `{}`\n\n", self.package));
        }
        if !self.description.is_empty() {
            page.push_str(&format!("{}\n\n", self.description));
        }

        if !self.entries.is_empty() {
            page.push_str("## Methods\n\n");
            for entry in &self.entries {
                page.push_str(&format!(
                    "- [{}](./{}.{})",
                    entry.name, entry.file_name, PAGE_EXTENSION
                ));
                if entry.streaming.is_streaming() {
                    page.push_str(&format!(" `{} streaming`", entry.streaming));
                }
                if entry.deprecated {
                    page.push_str(" *(deprecated)*");
                }
                page.push('\n');
            }
        }

        let mut page = page.trim_end().to_string();
        page.push('\n');
        page
    }

    /// Write `<output_dir>/index.md`, replacing any existing file.
    pub fn export(&self, output_dir: &Path) -> anyhow::Result<PathBuf> {
        let path = output_dir.join(INDEX_FILE_NAME);
        tracing::info!("Exporting index of {} to {}", self.title, path.display());

        fs::write(&path, self.render()).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
