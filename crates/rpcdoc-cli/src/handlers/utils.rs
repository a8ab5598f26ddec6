//! Shared utilities for command handlers

use crate::config::is_yaml;
use crate::error::{Error, Result};
use rpcdoc_core::{derive_file_name, DefinitionSet, MethodDefinition, ServiceDefinition};
use std::fs;
use std::path::{Path, PathBuf};

/// Load a definitions file (JSON or YAML)
pub fn load_definitions(path: &Path) -> Result<DefinitionSet> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    let definitions = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| {
            tracing::debug!("YAML parse error: {}", e);
            Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "YAML".to_string(),
            }
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| {
            tracing::debug!("JSON parse error: {}", e);
            Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "JSON".to_string(),
            }
        })?
    };

    Ok(definitions)
}

/// `<root>/<package>/<kebab service name>`
pub fn service_output_dir(root: &Path, service: &ServiceDefinition) -> PathBuf {
    let mut dir = root.to_path_buf();
    if !service.package.is_empty() {
        dir.push(&service.package);
    }
    dir.push(derive_file_name(&service.name));
    dir
}

/// Find a method by name, optionally restricted to one service
pub fn find_method<'a>(
    definitions: &'a DefinitionSet,
    method: &str,
    service: Option<&str>,
) -> Result<(&'a ServiceDefinition, &'a MethodDefinition)> {
    definitions
        .services
        .iter()
        .filter(|s| service.map_or(true, |name| s.name == name))
        .find_map(|s| s.methods.iter().find(|m| m.name == method).map(|m| (s, m)))
        .ok_or_else(|| Error::MethodNotFound {
            name: method.to_string(),
            service: service.map(str::to_string),
        })
}


#[cfg(test)]
mod tests {
    use super::test_support::{write_definitions, DEFINITIONS_JSON};
    use super::*;

    #[test]
    fn test_load_json_definitions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_definitions(dir.path(), DEFINITIONS_JSON);

        let definitions = load_definitions(&path).unwrap();
        assert_eq!(definitions.services.len(), 2);
        assert_eq!(definitions.method_count(), 4);
    }

    #[test]
    fn test_load_yaml_definitions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.yaml");
        fs::write(
            &path,
            "services:\n  - name: Router\n    package: routerrpc\n    methods:\n      - name: SendPaymentV2\n        responseStreaming: true\n",
        )
        .unwrap();

        let definitions = load_definitions(&path).unwrap();
        let method = &definitions.services[0].methods[0];
        assert_eq!(method.name, "SendPaymentV2");
        assert!(method.response_streaming);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(load_definitions(&missing), Err(Error::FileNotFound { .. })));

        let broken = write_definitions(dir.path(), "{ services: ");
        assert!(matches!(load_definitions(&broken), Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_service_output_dir() {
        let service = ServiceDefinition {
            name: "WalletKit".to_string(),
            package: "walletrpc".to_string(),
            ..Default::default()
        };
        assert_eq!(
            service_output_dir(Path::new("docs"), &service),
            Path::new("docs").join("walletrpc").join("wallet-kit")
        );
    }

    #[test]
    fn test_find_method() {
        let definitions: DefinitionSet = serde_json::from_str(DEFINITIONS_JSON).unwrap();

        let (service, method) = find_method(&definitions, "ListUnspent", None).unwrap();
        assert_eq!(service.name, "WalletKit");
        assert_eq!(method.name, "ListUnspent");

        let err = find_method(&definitions, "ListUnspent", Some("Lightning")).unwrap_err();
        assert!(matches!(err, Error::MethodNotFound { .. }));
    }
}
