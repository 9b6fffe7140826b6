use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Input selection shared by every command that reads GraphQL files.
#[derive(Debug, clap::Args)]
pub(crate) struct SourceArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to GraphQL files or directories that are read-only \
             libraries (e.g. vendored schemas). Their definitions are \
             merged but marked as library definitions.",
        long="library",
        name="LIBRARY_PATH",
    )]
    pub library_paths: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub file_or_dir_paths: Vec<PathBuf>,
}

/// The outcome of scanning some input paths for GraphQL files.
#[derive(Debug, Default)]
pub(crate) struct ScannedFiles {
    /// Canonicalized, sorted and deduplicated.
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
    pub errors: Vec<String>,
}

impl ScannedFiles {
    /// Drops every path that `other` also found.
    pub fn remove_paths_in(&mut self, other: &ScannedFiles) {
        self.file_paths
            .retain(|path| other.file_paths.binary_search(path).is_err());
    }
}

impl SourceArgs {
    /// Extensions to match, each with a leading `.` stripped.
    fn normalized_exts(&self) -> HashSet<String> {
        self.graphql_file_exts
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect()
    }

    pub fn scan_local(&self) -> ScannedFiles {
        scan(&self.file_or_dir_paths, &self.normalized_exts())
    }

    pub fn scan_library(&self) -> ScannedFiles {
        scan(&self.library_paths, &self.normalized_exts())
    }
}

/// Finds every file with a matching extension at or under `paths`.
///
/// A single explicitly named file is accepted even if its extension does not
/// match.
pub(crate) fn scan(paths: &[PathBuf], exts: &HashSet<String>) -> ScannedFiles {
    log::debug!("Scanning {} input paths...", paths.len());

    let mut scanned = ScannedFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {entry_path:#?}.");
                        continue;
                    }
                    if has_matching_ext(entry_path, exts) {
                        log::trace!("Found GraphQL file at {entry_path:#?}.");
                        push_canonical(&mut scanned, entry_path);
                    } else {
                        log::trace!("Skipping non-GraphQL file: {entry_path:#?}.");
                        scanned.num_skipped_files += 1;
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    scanned.errors.push(e.to_string());
                },
            }
        }
    }

    if scanned.file_paths.is_empty()
        && paths.len() == 1
        && let Some(only_path) = paths.first()
        && only_path.is_file() {
        log::warn!(
            "Proceeding with {only_path:#?} even though it doesn't match any \
            of the --graphql-file-exts ({}).",
            exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        scanned.num_skipped_files = scanned.num_skipped_files.saturating_sub(1);
        push_canonical(&mut scanned, only_path);
    }

    scanned.file_paths.sort();
    scanned.file_paths.dedup();
    scanned
}

fn has_matching_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| exts.contains(ext.as_ref()))
}

fn push_canonical(scanned: &mut ScannedFiles, path: &Path) {
    match std::fs::canonicalize(path) {
        Ok(canonical) => scanned.file_paths.push(canonical),
        Err(e) => scanned.errors.push(format!("{}: {e}", path.display())),
    }
}
