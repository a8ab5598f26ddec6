//! rpcdoc Core - API method definitions to MDX reference pages
//!
//! This crate turns the per-method records extracted from an API definition
//! into documentation pages, one file per method.
//!
//! # Main Components
//!
//! - **Normalizer**: alias-line stripping, deprecation detection and
//!   streaming classification for raw method text
//! - **Method records**: presentation-ready view of a method, built from a
//!   [`MethodDefinition`] and its [`ServiceContext`]
//! - **Templates and rendering**: a [`TemplateRegistry`] handed explicitly to
//!   a [`MethodRenderer`]
//! - **Export**: kebab-cased file naming and the [`MethodExporter`]
//! - **Index pages**: a [`ServiceIndex`] landing page linking a service's methods
//!
//! # Example
//!
//! ```no_run
//! use rpcdoc_core::{MethodDefinition, MethodRecord, ServiceContext, Result};
//!
//! fn example() -> Result<()> {
//!     let service = ServiceContext::new("Lightning", "lnrpc", "docs/lnrpc/lightning");
//!     let def = MethodDefinition {
//!         name: "CloseChannel".to_string(),
//!         description: "lncli: `closechannel`\nCloseChannel attempts to close a channel.".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let record = MethodRecord::new(def, &service)?;
//!     let path = service.export_method(&record)?;
//!     assert!(path.ends_with("close-channel.mdx"));
//!     Ok(())
//! }
//! ```

pub mod definition;
pub mod error;
pub mod export;
pub mod index;
pub mod markdown;
pub mod method;
pub mod normalizer;
pub mod render;
pub mod service;
pub mod templates;

pub use definition::{DefinitionSet, MethodDefinition, ServiceDefinition};
pub use error::{ConstructionError, Error, ExportError, Result};
pub use export::{derive_file_name, method_file_path, MethodExporter, PAGE_EXTENSION};
pub use index::{IndexEntry, ServiceIndex, INDEX_FILE_NAME};
pub use markdown::{clean_description, MarkdownCleaner, MdxCleaner};
pub use method::{MethodRecord, ServiceRef};
pub use normalizer::{
    classify_streaming, is_deprecated, match_leading_alias, strip_leading_alias, AliasMatch,
    StreamingDirection,
};
pub use render::{FileRenderer, MethodRenderer};
pub use service::ServiceContext;
pub use templates::{MarkdownMethodTemplate, MethodTemplate, TemplateRegistry, METHOD_TEMPLATE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
