mod parse_property_tests;
mod utils;
