//! Read-only service context shared by the methods of one service

use crate::error::ExportError;
use crate::export::MethodExporter;
use crate::method::{MethodRecord, ServiceRef};
use crate::templates::TemplateRegistry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Rendering configuration and identity of a service.
///
/// Method records only copy the service's name and package; they never hold
/// on to the context itself.
#[derive(Clone)]
pub struct ServiceContext {
    name: String,
    package: String,
    output_dir: PathBuf,
    templates: Arc<TemplateRegistry>,
}

impl ServiceContext {
    /// Create a context using the default template registry
    pub fn new(name: impl Into<String>, package: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self::with_templates(name, package, output_dir, Arc::new(TemplateRegistry::default()))
    }

    /// Create a context sharing an existing template registry
    pub fn with_templates(
        name: impl Into<String>,
        package: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        templates: Arc<TemplateRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            output_dir: output_dir.into(),
            templates,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Directory that receives this service's method pages
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn service_ref(&self) -> ServiceRef {
        ServiceRef {
            name: self.name.clone(),
            package: self.package.clone(),
        }
    }

    /// Export a method page into this service's output directory with the
    /// default file renderer.
    pub fn export_method(&self, method: &MethodRecord) -> Result<PathBuf, ExportError> {
        MethodExporter::new(&self.templates).export(method, &self.output_dir)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("name", &self.name)
            .field("package", &self.package)
            .field("output_dir", &self.output_dir)
            .field("templates", &self.templates.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::MethodDefinition;

    #[test]
    fn test_service_ref_copies_identity() {
        let service = ServiceContext::new("Router", "routerrpc", "out/routerrpc/router");
        let service_ref = service.service_ref();
        assert_eq!(service_ref.name, "Router");
        assert_eq!(service_ref.package, "routerrpc");
        assert_eq!(service.output_dir(), Path::new("out/routerrpc/router"));
    }

    #[test]
    fn test_shared_registry() {
        let templates = Arc::new(TemplateRegistry::default());
        let a = ServiceContext::with_templates("A", "pkg", "out/a", Arc::clone(&templates));
        let b = ServiceContext::with_templates("B", "pkg", "out/b", Arc::clone(&templates));
        assert!(a.templates().method_template().is_some());
        assert!(b.templates().method_template().is_some());
        assert_eq!(Arc::strong_count(&templates), 3);
    }

    #[test]
    fn test_record_outlives_context() {
        let record = {
            let service = ServiceContext::new("Lightning", "lnrpc", "out");
            let def = MethodDefinition {
                name: "GetInfo".to_string(),
                ..Default::default()
            };
            MethodRecord::new(def, &service).unwrap()
        };
        assert_eq!(record.service().name, "Lightning");
    }

    #[test]
    fn test_export_method_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let service = ServiceContext::new("Lightning", "lnrpc", dir.path());
        let def = MethodDefinition {
            name: "WalletBalance".to_string(),
            ..Default::default()
        };
        let record = MethodRecord::new(def, &service).unwrap();

        let path = service.export_method(&record).unwrap();
        assert_eq!(path, dir.path().join("wallet-balance.mdx"));
        assert!(path.exists());
    }
}
