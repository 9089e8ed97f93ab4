//! Perform Compile
//!
//! Loads IR documents, runs the component pipeline on each and gathers the diagnostics.

use crate::config::CompilerConfig;
use anyhow::Context;
use component_compiler::diagnostics::{collect_diagnostics, Diagnostic, DiagnosticSeverity};
use component_compiler::ir::Node;
use component_compiler::logging::{Logger, ScopedLogger};
use component_compiler::pipeline::PassPipeline;
use indexmap::IndexMap;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Outcome for one input document.
#[derive(Debug)]
pub struct FileResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Lowered tree as JSON, when requested.
    pub tree: Option<String>,
}

#[derive(Debug, Default)]
pub struct CompilationResult {
    /// Keyed by input path, in input order. Documents that failed to load hold the error.
    pub files: IndexMap<PathBuf, anyhow::Result<FileResult>>,
}

impl CompilationResult {
    pub fn diagnostics(&self) -> impl Iterator<Item = (&Path, &Diagnostic)> {
        self.files.iter().flat_map(|(path, result)| {
            result
                .iter()
                .flat_map(|file| file.diagnostics.iter())
                .map(move |diagnostic| (path.as_path(), diagnostic))
        })
    }

    /// True when any document failed to load or reported a diagnostic that fails the build.
    pub fn has_failures(&self, warnings_as_errors: bool) -> bool {
        let load_failed = self.files.values().any(|result| result.is_err());
        load_failed
            || self.diagnostics().any(|(_, diagnostic)| {
                diagnostic.severity == DiagnosticSeverity::Error || warnings_as_errors
            })
    }
}

/// Expands glob patterns into the list of input documents, keeping pattern order.
pub fn expand_inputs(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for pattern in patterns {
        let matches = glob::glob(pattern)
            .map_err(|e| anyhow::anyhow!("Failed to read glob pattern {}: {}", pattern, e))?;
        let before = inputs.len();
        for entry in matches {
            let path = entry?;
            if !inputs.contains(&path) {
                inputs.push(path);
            }
        }
        if inputs.len() == before {
            anyhow::bail!("No IR documents match {}", pattern);
        }
    }
    Ok(inputs)
}

pub fn compile_file(
    path: &Path,
    pipeline: &PassPipeline,
    logger: &dyn Logger,
    emit_tree: bool,
) -> anyhow::Result<FileResult> {
    let mut document = Node::read_document(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let logger = ScopedLogger::new(logger, path.display().to_string());
    logger.debug("compiling");
    pipeline.run(&mut document, &logger);

    let diagnostics = collect_diagnostics(&document).into_iter().cloned().collect();
    let tree = if emit_tree {
        Some(document.to_json_pretty()?)
    } else {
        None
    };
    Ok(FileResult { diagnostics, tree })
}

/// Compiles every input in parallel; each document gets its own tree and pipeline run.
pub fn perform_compilation<L>(inputs: &[PathBuf], config: &CompilerConfig, logger: &L) -> CompilationResult
where
    L: Logger + Sync,
{
    let pipeline = PassPipeline::default_component_pipeline();
    logger.info(&format!(
        "compiling {} documents with passes [{}]",
        inputs.len(),
        pipeline.pass_names().join(", ")
    ));

    let results: Vec<(PathBuf, anyhow::Result<FileResult>)> = inputs
        .par_iter()
        .map(|path| {
            let result = compile_file(path, &pipeline, logger, config.emit_tree());
            (path.clone(), result)
        })
        .collect();

    CompilationResult {
        files: results.into_iter().collect(),
    }
}
