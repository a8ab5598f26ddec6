//! List command handler

use crate::cli::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use rpcdoc_core::{method_file_path, MethodRecord, ServiceContext, StreamingDirection};
use serde::Serialize;
use std::path::PathBuf;
use tracing::instrument;

use super::utils::{load_definitions, service_output_dir};

/// One row of the method listing
#[derive(Debug, Clone, Serialize)]
pub struct MethodListing {
    pub service: String,
    pub method: String,
    pub path: PathBuf,
    pub streaming: StreamingDirection,
    pub deprecated: bool,
}

/// Handle the list command
#[instrument(skip(config, output), fields(file = %args.definitions.display()))]
pub fn handle_list(args: ListArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let definitions = load_definitions(&args.definitions)?;
    let root = config.output_dir(None);

    let mut listings = Vec::with_capacity(definitions.method_count());
    for service_def in &definitions.services {
        let service = ServiceContext::new(
            service_def.name.as_str(),
            service_def.package.as_str(),
            service_output_dir(&root, service_def),
        );

        for method in &service_def.methods {
            let record = match MethodRecord::new(method.clone(), &service) {
                Ok(record) => record,
                Err(e) => {
                    output.warning(&format!("{}: {}, skipping", service_def.name, e))?;
                    continue;
                }
            };
            listings.push(MethodListing {
                service: service_def.name.clone(),
                method: record.name().to_string(),
                path: method_file_path(service.output_dir(), &record),
                streaming: record.streaming_direction(),
                deprecated: record.is_deprecated(),
            });
        }
    }

    if output.format() != OutputFormat::Human {
        return output.data(&listings);
    }

    output.section(&format!("{} method(s)", listings.len()))?;
    let rows = listings
        .iter()
        .map(|l| {
            vec![
                l.service.clone(),
                l.method.clone(),
                l.path.display().to_string(),
                l.streaming.to_string(),
                if l.deprecated { "yes".to_string() } else { String::new() },
            ]
        })
        .collect();
    output.table(&["Service", "Method", "Page", "Streaming", "Deprecated"], rows)
}
