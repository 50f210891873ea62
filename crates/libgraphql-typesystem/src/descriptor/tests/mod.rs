mod config_value_tests;
mod descriptor_tests;
