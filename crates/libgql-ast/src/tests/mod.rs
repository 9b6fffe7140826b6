mod property_tests;
mod traverser_tests;
mod tree_transformer_tests;
mod utils;
