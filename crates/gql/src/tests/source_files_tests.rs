use crate::source_files::scan;
use crate::tests::utils::WriteFixture;
use std::collections::HashSet;

fn graphql_exts() -> HashSet<String> {
    HashSet::from(["graphql".to_string(), "graphqls".to_string()])
}

#[test]
fn scans_directories_recursively_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    dir.write("b.graphql", "scalar B");
    dir.write("nested/a.graphqls", "scalar A");
    dir.write("nested/readme.md", "# not graphql");

    let scanned = scan(&[dir.path().to_path_buf()], &graphql_exts());

    let names: Vec<_> = scanned
        .file_paths
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"a.graphqls".to_string()));
    assert!(names.contains(&"b.graphql".to_string()));
    assert_eq!(scanned.num_skipped_files, 1);
    assert!(scanned.errors.is_empty());
    assert!(scanned.file_paths.iter().all(|path| path.is_absolute()));
}

#[test]
fn single_explicit_file_is_accepted_regardless_of_extension() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.write("schema.txt", "scalar S");

    let scanned = scan(&[schema], &graphql_exts());
    assert_eq!(scanned.file_paths.len(), 1);
    assert_eq!(scanned.num_skipped_files, 0);
}

#[test]
fn the_same_file_is_only_scanned_once() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.write("schema.graphql", "scalar S");

    let scanned = scan(&[dir.path().to_path_buf(), schema], &graphql_exts());
    assert_eq!(scanned.file_paths.len(), 1);
}

#[test]
fn missing_paths_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let scanned = scan(&[dir.path().join("nope")], &graphql_exts());
    assert!(scanned.file_paths.is_empty());
    assert_eq!(scanned.errors.len(), 1);
}

#[test]
fn removing_paths_found_by_another_scan() {
    let dir = tempfile::tempdir().unwrap();
    let library = dir.write("vendor/lib.graphql", "scalar L");
    dir.write("app.graphql", "scalar A");

    let library_files = scan(&[library], &graphql_exts());
    let mut local_files = scan(&[dir.path().to_path_buf()], &graphql_exts());
    assert_eq!(local_files.file_paths.len(), 2);

    local_files.remove_paths_in(&library_files);
    let names: Vec<_> = local_files
        .file_paths
        .iter()
        .map(|path| path.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["app.graphql"]);
}
