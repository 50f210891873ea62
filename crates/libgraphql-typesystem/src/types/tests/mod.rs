mod argument_tests;
mod types_map_tests;
