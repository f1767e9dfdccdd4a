mod page_tests;
mod pipeline_property_tests;
mod sort_tests;
