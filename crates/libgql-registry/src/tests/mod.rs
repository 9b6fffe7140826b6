mod registry_builder_tests;
mod registry_tests;
mod utils;
