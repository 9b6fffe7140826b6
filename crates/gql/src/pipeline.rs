//! Scan, read, parse, convert and merge: the steps every command shares.

use crate::output_utils;
use crate::source_files::ScannedFiles;
use crate::source_files::SourceArgs;
use anyhow::Context;
use libgql_ast::ast::Definition;
use libgql_ast::ast::Document;
use libgql_ast::ast::Provenance;
use libgql_ast::convert_document;
use libgql_ast::ConvertOptions;
use libgql_registry::CompositeRegistryBuilder;
use libgql_registry::RegistryBuildResult;
use libgql_syntax::parse_document;
use libgql_syntax::SyntaxError;
use std::path::PathBuf;

#[derive(Debug)]
pub(crate) struct LoadedDocument {
    pub path: PathBuf,
    pub document: Document,
    pub syntax_errors: Vec<SyntaxError>,
}

#[derive(Debug)]
pub(crate) struct PipelineOutput {
    pub library_files: ScannedFiles,
    pub local_files: ScannedFiles,
    pub documents: Vec<LoadedDocument>,
    pub read_errors: Vec<String>,
    pub build: RegistryBuildResult,
}

impl PipelineOutput {
    pub fn syntax_errors(&self) -> impl Iterator<Item = &SyntaxError> {
        self.documents.iter().flat_map(|loaded| &loaded.syntax_errors)
    }

    pub fn num_files(&self) -> usize {
        self.documents.len()
    }

    pub fn num_skipped_files(&self) -> usize {
        self.library_files.num_skipped_files + self.local_files.num_skipped_files
    }

    /// Counts `(operations, fragments)` across all documents.
    pub fn num_executable_definitions(&self) -> (usize, usize) {
        self.documents
            .iter()
            .flat_map(|loaded| &loaded.document.definitions)
            .fold((0, 0), |(ops, frags), def| match def {
                Definition::Operation(_) => (ops + 1, frags),
                Definition::Fragment(_) => (ops, frags + 1),
                _ => (ops, frags),
            })
    }

    fn input_errors(&self) -> impl Iterator<Item = &String> {
        self.library_files
            .errors
            .iter()
            .chain(&self.local_files.errors)
            .chain(&self.read_errors)
    }

    pub fn has_errors(&self) -> bool {
        self.input_errors().next().is_some()
            || self.syntax_errors().next().is_some()
            || !self.build.is_valid()
    }

    /// Every problem found, grouped by stage. Empty when there are none.
    pub fn error_report(&self) -> String {
        let mut sections = vec![];

        let input_errors: Vec<_> = self
            .input_errors()
            .map(|err| format!("  * {err}"))
            .collect();
        if !input_errors.is_empty() {
            sections.push(format!(
                "{} errors reading input files:\n{}",
                input_errors.len(),
                input_errors.join("\n"),
            ));
        }

        let syntax_errors: Vec<_> = self
            .syntax_errors()
            .map(output_utils::format_syntax_error)
            .collect();
        if !syntax_errors.is_empty() {
            sections.push(format!(
                "{} syntax errors:\n{}",
                syntax_errors.len(),
                syntax_errors.join("\n"),
            ));
        }

        let registry_errors: Vec<_> = self
            .build
            .errors
            .iter()
            .map(output_utils::format_registry_error)
            .collect();
        if !registry_errors.is_empty() {
            sections.push(format!(
                "{} definition errors:\n{}",
                registry_errors.len(),
                registry_errors.join("\n"),
            ));
        }

        sections.join("\n\n")
    }
}

/// Runs the whole front end over the files selected by `args`.
///
/// Files are read and converted concurrently, then merged in path order
/// with library documents first, so results do not depend on scheduling.
pub(crate) async fn run(args: &SourceArgs) -> anyhow::Result<PipelineOutput> {
    let library_files = args.scan_library();
    let mut local_files = args.scan_local();
    // A library file under a local directory is loaded once, as library.
    local_files.remove_paths_in(&library_files);
    log::debug!(
        "Found {} GraphQL files and {} library files.",
        local_files.file_paths.len(),
        library_files.file_paths.len(),
    );

    let mut read_errors = vec![];
    let mut documents = vec![];
    for (files, provenance) in [
        (&library_files, Provenance::ReadOnlyLibrary),
        (&local_files, Provenance::Local),
    ] {
        for loaded in load_documents(&files.file_paths, provenance).await? {
            match loaded {
                Ok(loaded) => documents.push(loaded),
                Err(e) => read_errors.push(format!("{e:#}")),
            }
        }
    }

    let mut builder = CompositeRegistryBuilder::new();
    for loaded in &documents {
        builder.add_document(&loaded.document);
    }
    let build = builder.build();
    log::debug!(
        "Built a registry with {} types ({} errors).",
        build.registry.types().count(),
        build.errors.len(),
    );

    Ok(PipelineOutput {
        library_files,
        local_files,
        documents,
        read_errors,
        build,
    })
}

/// Loads every file concurrently. The outer error is a failed task; the
/// inner per-file errors are unreadable files.
async fn load_documents(
    paths: &[PathBuf],
    provenance: Provenance,
) -> anyhow::Result<Vec<anyhow::Result<LoadedDocument>>> {
    let tasks: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(load_document(path, provenance)))
        .collect();

    let mut loaded = Vec::with_capacity(tasks.len());
    for task in tasks {
        loaded.push(task.await.context("File loading task failed")?);
    }
    Ok(loaded)
}

async fn load_document(
    path: PathBuf,
    provenance: Provenance,
) -> anyhow::Result<LoadedDocument> {
    let source = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    log::trace!("Read {} bytes from {path:#?}.", source.len());

    tokio::task::spawn_blocking(move || {
        let source_name = path.display().to_string();
        let parsed = parse_document(&source, Some(source_name.as_str()));
        let options = ConvertOptions {
            provenance,
            source_name: Some(source_name),
        };
        let document = convert_document(&parsed.tree, &options);
        LoadedDocument {
            path,
            document,
            syntax_errors: parsed.errors,
        }
    })
    .await
    .context("Conversion task failed")
}
