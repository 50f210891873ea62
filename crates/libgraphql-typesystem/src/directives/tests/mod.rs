mod directive_location_tests;
mod directive_set_tests;
