//! Page templates for method documentation
//!
//! A template is any value implementing [`MethodTemplate`]; the registry maps
//! template names to implementations and is handed to renderers explicitly.
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::markdown::clean_description;
use crate::method::MethodRecord;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry key of the template used for method pages
pub const METHOD_TEMPLATE: &str = "method";

/// Turns a method record into page content
pub trait MethodTemplate: Send + Sync {
    fn render(&self, method: &MethodRecord) -> anyhow::Result<String>;
}

impl<F> MethodTemplate for F
where
    F: Fn(&MethodRecord) -> anyhow::Result<String> + Send + Sync,
{
    fn render(&self, method: &MethodRecord) -> anyhow::Result<String> {
        self(method)
    }
}

/// Named templates available to renderers
pub struct TemplateRegistry {
    templates: HashMap<String, Arc<dyn MethodTemplate>>,
}

impl TemplateRegistry {
    /// A registry with no templates at all
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Register a template, returning the one it replaced
    pub fn register(
        &mut self,
        name: impl Into<String>,
        template: impl MethodTemplate + 'static,
    ) -> Option<Arc<dyn MethodTemplate>> {
        self.templates.insert(name.into(), Arc::new(template))
    }

    pub fn get(&self, name: &str) -> Option<&dyn MethodTemplate> {
        self.templates.get(name).map(|t| t.as_ref())
    }

    /// The template registered under [`METHOD_TEMPLATE`]
    pub fn method_template(&self) -> Option<&dyn MethodTemplate> {
        self.get(METHOD_TEMPLATE)
    }

    /// Registered template names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(METHOD_TEMPLATE, MarkdownMethodTemplate::default());
        registry
    }
}

/// Built-in MDX page for a method
#[derive(Debug, Clone)]
pub struct MarkdownMethodTemplate {
    /// Emit the "Command Line" section when the method has a CLI equivalent
    pub include_command_line: bool,
}

impl Default for MarkdownMethodTemplate {
    fn default() -> Self {
        Self {
            include_command_line: true,
        }
    }
}

impl MethodTemplate for MarkdownMethodTemplate {
    fn render(&self, method: &MethodRecord) -> anyhow::Result<String> {
        let mut page = Self::front_matter(method.name());

        page.push_str(&format!("# {}\n\n", method.name()));

        if method.is_deprecated() {
            page.push_str(":::danger\n\nThis method is deprecated.\n\n:::\n\n");
        }

        let description = clean_description(method.description(), true);
        if !description.is_empty() {
            page.push_str(&format!("{}\n\n", description));
        }

        if !method.source().is_empty() {
            page.push_str(&format!("**Source:** `{}`\n\n", method.source()));
        }

        let direction = method.streaming_direction();
        if direction.is_streaming() {
            page.push_str(&format!("**Streaming:** `{}`\n\n", direction));
        }

        page.push_str(&Self::type_section(
            "Request",
            method.request_type(),
            method.request_full_type(),
            method.request_type_source(),
            method.request_streaming(),
        ));
        page.push_str(&Self::type_section(
            "Response",
            method.response_type(),
            method.response_full_type(),
            method.response_type_source(),
            method.response_streaming(),
        ));

        if self.include_command_line && !method.command_line().is_empty() {
            page.push_str(&Self::command_line(method.command_line(), method.command_line_help()));
        }

        let mut page = page.trim_end().to_string();
        page.push('\n');
        Ok(page)
    }
}

impl MarkdownMethodTemplate {
    fn front_matter(name: &str) -> String {
        let quoted = name.replace('\\', "\\\\").replace('"', "\\\"");
        format!("---\ntitle: \"{0}\"\nsidebar_label: \"{0}\"\n---\n\n", quoted)
    }

    fn type_section(title: &str, short: &str, full: &str, source: &str, streaming: bool) -> String {
        let type_name = if full.is_empty() { short } else { full };
        if type_name.is_empty() {
            return String::new();
        }

        let mut section = format!("## {}\n\n`{}`", title, type_name);
        if !source.is_empty() {
            section.push_str(&format!(" (defined in `{}`)", source));
        }
        section.push_str("\n\n");

        if streaming {
            section.push_str("This is a stream of messages.\n\n");
        }

        section
    }

    fn command_line(command: &str, help: &str) -> String {
        let mut section = format!("## Command Line\n\n```shell\n$ {} --help\n```\n\n", command);
        if !help.is_empty() {
            section.push_str(&format!("{}\n\n", help));
        }
        section
    }
}
