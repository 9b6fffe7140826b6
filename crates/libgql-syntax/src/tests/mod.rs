mod parser_tests;
mod utils;
