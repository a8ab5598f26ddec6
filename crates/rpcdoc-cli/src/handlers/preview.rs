//! Preview command handler

use crate::cli::{OutputFormat, PreviewArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use rpcdoc_core::{method_file_path, MethodRecord, ServiceContext};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, instrument};

use super::utils::{find_method, load_definitions, service_output_dir};

/// A rendered page together with where `generate` would write it
#[derive(Debug, Serialize)]
struct PreviewOutput<'a> {
    path: PathBuf,
    page: String,
    method: &'a MethodRecord,
}

/// Handle the preview command
#[instrument(skip(config, output), fields(method = %args.method))]
pub fn handle_preview(args: PreviewArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("preview_command", &args.method);

    let definitions = load_definitions(&args.definitions)?;
    let (service_def, method_def) = find_method(&definitions, &args.method, args.service.as_deref())?;

    let root = config.output_dir(None);
    let service = ServiceContext::new(
        service_def.name.as_str(),
        service_def.package.as_str(),
        service_output_dir(&root, service_def),
    );
    let record = MethodRecord::new(method_def.clone(), &service)?;
    let path = method_file_path(service.output_dir(), &record);

    let template = service
        .templates()
        .method_template()
        .ok_or_else(|| Error::other("no 'method' template registered"))?;
    let page = template
        .render(&record)
        .map_err(|e| Error::other(format!("template failed for method {}: {:#}", record.name(), e)))?;
    debug!(path = %path.display(), bytes = page.len(), "Rendered preview");

    if output.format() == OutputFormat::Human {
        output.write(&page)
    } else {
        output.data(&PreviewOutput {
            path,
            page,
            method: &record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::utils::test_support::{write_definitions, SharedBuffer, DEFINITIONS_JSON};

    fn preview(format: OutputFormat, method: &str, service: Option<&str>) -> Result<String> {
        let dir = tempfile::tempdir().unwrap();
        let definitions = write_definitions(dir.path(), DEFINITIONS_JSON);
        let buffer = SharedBuffer::default();
        let mut output = OutputWriter::with_writer(format, false, false, Box::new(buffer.clone()));

        let args = PreviewArgs {
            definitions,
            method: method.to_string(),
            service: service.map(str::to_string),
        };
        handle_preview(args, &Config::default(), &mut output)?;
        Ok(buffer.contents())
    }

    #[test]
    fn test_human_preview_writes_page() {
        let page = preview(OutputFormat::Human, "GetInfo", None).unwrap();
        assert!(page.starts_with("---\n"));
        assert!(page.contains("# GetInfo"));
        assert!(page.contains("GetInfo returns general information"));
        assert!(!page.contains("lncli: `getinfo`"));
    }

    #[test]
    fn test_json_preview_includes_path_and_record() {
        let raw = preview(OutputFormat::Json, "SendPayment", Some("Lightning")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let path = value["path"].as_str().unwrap();
        assert!(path.ends_with("send-payment.mdx"));
        assert!(path.contains("lnrpc"));
        assert_eq!(value["method"]["name"], "SendPayment");
        assert!(value["page"].as_str().unwrap().contains(":::danger"));
    }

    #[test]
    fn test_preview_unknown_method() {
        let err = preview(OutputFormat::Human, "Nope", None).unwrap_err();
        assert!(matches!(err, Error::MethodNotFound { .. }));
    }

    #[test]
    fn test_preview_does_not_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let definitions = write_definitions(dir.path(), DEFINITIONS_JSON);
        let out = dir.path().join("docs");
        let config = Config {
            generate: crate::config::GenerateConfig {
                output_dir: out.clone(),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut output = OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(std::io::sink()));

        let args = PreviewArgs {
            definitions,
            method: "ListUnspent".to_string(),
            service: None,
        };
        handle_preview(args, &config, &mut output).unwrap();
        assert!(!out.exists());
    }
}
