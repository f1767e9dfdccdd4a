mod task_schema_tests;
mod utils;
