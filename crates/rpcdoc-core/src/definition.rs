//! Input definitions as produced by the API schema loader
//!
//! These mirror the loader's output one-to-one. Nothing here is validated or
//! resolved; type references are opaque strings.
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Raw definition of a single API method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodDefinition {
    pub name: String,
    pub description: String,
    pub source: String,
    pub command_line: String,
    pub command_line_help: String,
    pub request_type: String,
    pub request_full_type: String,
    pub request_type_source: String,
    pub request_streaming: bool,
    pub response_type: String,
    pub response_full_type: String,
    pub response_type_source: String,
    pub response_streaming: bool,
}

/// A service and the methods it exposes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDefinition {
    pub name: String,
    pub package: String,
    pub description: String,
    pub methods: Vec<MethodDefinition>,
}

/// Top-level document handed to the generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionSet {
    pub services: Vec<ServiceDefinition>,
}

impl DefinitionSet {
    /// Total number of methods across all services
    pub fn method_count(&self) -> usize {
        self.services.iter().map(|s| s.methods.len()).sum()
    }
}
