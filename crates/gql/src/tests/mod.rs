mod logging_tests;
mod source_files_tests;
mod utils;
