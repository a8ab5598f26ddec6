//! Presentation record for a single API method

use crate::definition::MethodDefinition;
use crate::error::ConstructionError;
use crate::export::derive_file_name;
use crate::markdown::{MarkdownCleaner, MdxCleaner};
use crate::normalizer::{classify_streaming, is_deprecated, strip_leading_alias, StreamingDirection};
use crate::service::ServiceContext;
use serde::Serialize;

/// Identity of the service a method belongs to.
///
/// Copied out of the [`ServiceContext`] at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRef {
    pub name: String,
    pub package: String,
}

/// Presentation-ready view of one API method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    name: String,
    description: String,
    source: String,
    command_line: String,
    command_line_help: String,
    request_type: String,
    request_full_type: String,
    request_type_source: String,
    request_streaming: bool,
    response_type: String,
    response_full_type: String,
    response_type_source: String,
    response_streaming: bool,
    service: ServiceRef,
}

impl MethodRecord {
    /// Build a record using the default MDX cleaner for the help text
    pub fn new(def: MethodDefinition, service: &ServiceContext) -> Result<Self, ConstructionError> {
        Self::with_cleaner(def, service, &MdxCleaner)
    }

    /// Build a record with a caller-supplied markdown cleaner
    pub fn with_cleaner(
        def: MethodDefinition,
        service: &ServiceContext,
        cleaner: &dyn MarkdownCleaner,
    ) -> Result<Self, ConstructionError> {
        if def.name.trim().is_empty() {
            return Err(ConstructionError::EmptyName);
        }

        Ok(Self {
            description: strip_leading_alias(&def.description),
            command_line_help: cleaner.clean(&def.command_line_help, false),
            name: def.name,
            source: def.source,
            command_line: def.command_line,
            request_type: def.request_type,
            request_full_type: def.request_full_type,
            request_type_source: def.request_type_source,
            request_streaming: def.request_streaming,
            response_type: def.response_type,
            response_full_type: def.response_full_type,
            response_type_source: def.response_type_source,
            response_streaming: def.response_streaming,
            service: service.service_ref(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    pub fn command_line_help(&self) -> &str {
        &self.command_line_help
    }

    pub fn request_type(&self) -> &str {
        &self.request_type
    }

    pub fn request_full_type(&self) -> &str {
        &self.request_full_type
    }

    pub fn request_type_source(&self) -> &str {
        &self.request_type_source
    }

    pub fn request_streaming(&self) -> bool {
        self.request_streaming
    }

    pub fn response_type(&self) -> &str {
        &self.response_type
    }

    pub fn response_full_type(&self) -> &str {
        &self.response_full_type
    }

    pub fn response_type_source(&self) -> &str {
        &self.response_type_source
    }

    pub fn response_streaming(&self) -> bool {
        self.response_streaming
    }

    /// The owning service this record was built for
    pub fn service(&self) -> &ServiceRef {
        &self.service
    }

    /// True if the description mentions "deprecated" in any casing
    pub fn is_deprecated(&self) -> bool {
        is_deprecated(&self.description)
    }

    pub fn streaming_direction(&self) -> StreamingDirection {
        classify_streaming(self.request_streaming, self.response_streaming)
    }

    /// Kebab-cased name used as the output file stem
    pub fn file_name(&self) -> String {
        derive_file_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightning() -> ServiceContext {
        ServiceContext::new("Lightning", "lnrpc", "docs/lnrpc/lightning")
    }

    fn close_channel() -> MethodDefinition {
        MethodDefinition {
            name: "CloseChannel".to_string(),
            description: "lncli: `closechannel`\nCloseChannel attempts to close an active channel.".to_string(),
            source: "lightning.proto".to_string(),
            command_line: "lncli closechannel".to_string(),
            command_line_help: "Close an existing channel.\n   The channel can be closed either cooperatively.".to_string(),
            request_type: "CloseChannelRequest".to_string(),
            request_full_type: "lnrpc.CloseChannelRequest".to_string(),
            request_type_source: "lightning.proto".to_string(),
            request_streaming: false,
            response_type: "CloseStatusUpdate".to_string(),
            response_full_type: "lnrpc.CloseStatusUpdate".to_string(),
            response_type_source: "lightning.proto".to_string(),
            response_streaming: true,
        }
    }

    #[test]
    fn test_construct_normalizes_text_fields() {
        let record = MethodRecord::new(close_channel(), &lightning()).unwrap();

        assert_eq!(record.name(), "CloseChannel");
        assert_eq!(record.description(), "CloseChannel attempts to close an active channel.");
        assert_eq!(
            record.command_line_help(),
            "Close an existing channel. The channel can be closed either cooperatively."
        );
        assert_eq!(record.command_line(), "lncli closechannel");
    }

    #[test]
    fn test_construct_copies_passthrough_fields() {
        let record = MethodRecord::new(close_channel(), &lightning()).unwrap();

        assert_eq!(record.source(), "lightning.proto");
        assert_eq!(record.request_type(), "CloseChannelRequest");
        assert_eq!(record.request_full_type(), "lnrpc.CloseChannelRequest");
        assert_eq!(record.request_type_source(), "lightning.proto");
        assert_eq!(record.response_type(), "CloseStatusUpdate");
        assert_eq!(record.response_full_type(), "lnrpc.CloseStatusUpdate");
        assert_eq!(record.response_type_source(), "lightning.proto");
        assert!(!record.request_streaming());
        assert!(record.response_streaming());
        assert_eq!(record.service().name, "Lightning");
        assert_eq!(record.service().package, "lnrpc");
    }

    #[test]
    fn test_derived_views() {
        let record = MethodRecord::new(close_channel(), &lightning()).unwrap();
        assert_eq!(record.streaming_direction(), StreamingDirection::Server);
        assert!(!record.is_deprecated());
        assert_eq!(record.file_name(), "close-channel");
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut def = close_channel();
        def.name = String::new();
        assert_eq!(
            MethodRecord::new(def.clone(), &lightning()),
            Err(ConstructionError::EmptyName)
        );

        def.name = "  \t".to_string();
        assert_eq!(
            MethodRecord::new(def, &lightning()),
            Err(ConstructionError::EmptyName)
        );
    }

    #[test]
    fn test_custom_cleaner_is_used() {
        struct Upper;
        impl MarkdownCleaner for Upper {
            fn clean(&self, text: &str, preserve_structure: bool) -> String {
                assert!(!preserve_structure);
                text.to_uppercase()
            }
        }

        let mut def = close_channel();
        def.command_line_help = "close it".to_string();
        let record = MethodRecord::with_cleaner(def, &lightning(), &Upper).unwrap();
        assert_eq!(record.command_line_help(), "CLOSE IT");
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = MethodRecord::new(close_channel(), &lightning()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["commandLine"], "lncli closechannel");
        assert_eq!(value["responseStreaming"], true);
        assert_eq!(value["service"]["package"], "lnrpc");
    }
}
