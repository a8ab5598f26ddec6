//! Generate command handler

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{error_chain, Error, Result};
use crate::logging::{run_id, timing::Timer};
use crate::output::OutputWriter;
use chrono::{DateTime, Utc};
use rpcdoc_core::{
    MethodDefinition, MethodRecord, ServiceContext, ServiceIndex, StreamingDirection, TemplateRegistry,
    INDEX_FILE_NAME, PAGE_EXTENSION,
};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::utils::{load_definitions, service_output_dir};

/// Summary of one generate run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub output_dir: PathBuf,
    pub duration_ms: u64,
    pub exported: Vec<ExportedPage>,
    pub indexes: Vec<PathBuf>,
    pub skipped: Vec<String>,
    pub failures: Vec<MethodFailure>,
}

/// A page that was written
#[derive(Debug, Clone, Serialize)]
pub struct ExportedPage {
    pub service: String,
    pub method: String,
    pub path: PathBuf,
    pub streaming: StreamingDirection,
    pub deprecated: bool,
}

/// A method that could not be generated
#[derive(Debug, Clone, Serialize)]
pub struct MethodFailure {
    pub service: String,
    pub method: String,
    pub error: String,
}

impl GenerationReport {
    fn new(output_dir: PathBuf) -> Self {
        Self {
            run_id: run_id().to_string(),
            started_at: Utc::now(),
            output_dir,
            duration_ms: 0,
            exported: Vec::new(),
            indexes: Vec::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
        }
    }

    fn fail(&mut self, service: &str, method: &str, error: String) {
        warn!(service, method, error = %error, "Method generation failed");
        self.failures.push(MethodFailure {
            service: service.to_string(),
            method: method.to_string(),
            error,
        });
    }
}

/// Pages written so far into one service directory
struct ServicePages {
    file_names: HashSet<String>,
    index: ServiceIndex,
}

impl ServicePages {
    fn new(service: &ServiceContext, description: &str) -> Self {
        Self {
            file_names: HashSet::new(),
            index: ServiceIndex::new(service, description),
        }
    }
}

#[derive(Debug)]
enum Outcome {
    Exported(ExportedPage),
    Skipped(String),
}

/// Handle the generate command
#[instrument(skip(config, output), fields(file = %args.definitions.display()))]
pub fn handle_generate(args: GenerateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::with_details("generate_command", &args.definitions.display().to_string());

    let definitions = load_definitions(&args.definitions)?;
    let total = definitions.method_count();
    let root = config.output_dir(args.out_dir.as_deref());
    let fail_fast = args.fail_fast || config.generate.fail_fast;
    let include_deprecated = config.generate.include_deprecated && !args.skip_deprecated;
    let write_index = config.generate.write_index && !args.no_index;

    output.info(&format!(
        "Generating {} method page(s) from {} into {}",
        total,
        args.definitions.display(),
        root.display()
    ))?;

    let templates = Arc::new(TemplateRegistry::default());
    let mut report = GenerationReport::new(root.clone());
    let progress = output.progress_bar(total as u64, "Generating pages");

    'services: for service_def in definitions.services {
        let dir = service_output_dir(&root, &service_def);

        if let Err(e) = fs::create_dir_all(&dir) {
            let error = format!("failed to create {}: {}", dir.display(), e);
            for method_def in &service_def.methods {
                report.fail(&service_def.name, &method_def.name, error.clone());
            }
            if let Some(pb) = &progress {
                pb.inc(service_def.methods.len() as u64);
            }
            if fail_fast {
                break 'services;
            }
            continue;
        }

        let service = ServiceContext::with_templates(
            service_def.name.as_str(),
            service_def.package.as_str(),
            dir,
            Arc::clone(&templates),
        );
        info!(service = service.name(), methods = service_def.methods.len(), "Generating service");
        let mut pages = ServicePages::new(&service, &service_def.description);

        for method_def in service_def.methods {
            let method_name = method_def.name.clone();
            let outcome = generate_method(method_def, &service, include_deprecated, &mut pages);

            if let Some(pb) = &progress {
                pb.inc(1);
            }

            match outcome {
                Ok(Outcome::Exported(page)) => report.exported.push(page),
                Ok(Outcome::Skipped(name)) => {
                    info!(method = %name, "Skipping deprecated method");
                    report.skipped.push(name);
                }
                Err(e) => {
                    report.fail(service.name(), &method_name, error_chain(&e));
                    if fail_fast {
                        break 'services;
                    }
                }
            }
        }

        if write_index {
            match pages.index.export(service.output_dir()) {
                Ok(path) => report.indexes.push(path),
                Err(e) => {
                    report.fail(service.name(), INDEX_FILE_NAME, format!("{:#}", e));
                    if fail_fast {
                        break 'services;
                    }
                }
            }
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    report.duration_ms = timer.elapsed().as_millis() as u64;
    output.generation_report(&report)?;

    if report.failures.is_empty() {
        Ok(())
    } else {
        Err(Error::GenerationFailed {
            failed: report.failures.len(),
            total,
        })
    }
}

/// Construct and export one method; failures stay local to the method
fn generate_method(
    def: MethodDefinition,
    service: &ServiceContext,
    include_deprecated: bool,
    pages: &mut ServicePages,
) -> Result<Outcome> {
    let record = MethodRecord::new(def, service)?;

    if !include_deprecated && record.is_deprecated() {
        return Ok(Outcome::Skipped(record.name().to_string()));
    }

    let file_name = record.file_name();
    if !pages.file_names.insert(file_name.clone()) {
        return Err(Error::DuplicateFileName {
            method: record.name().to_string(),
            file_name: format!("{}.{}", file_name, PAGE_EXTENSION),
        });
    }

    let path = service.export_method(&record)?;
    pages.index.push(&record);

    Ok(Outcome::Exported(ExportedPage {
        service: service.name().to_string(),
        method: record.name().to_string(),
        path,
        streaming: record.streaming_direction(),
        deprecated: record.is_deprecated(),
    }))
}
