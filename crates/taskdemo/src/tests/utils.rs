use crate::tasks::Task;
use crate::tasks::TaskStore;
use crate::tasks::task_schema;
use agentquery::execution::Outcome;
use agentquery::operation::MutationOptions;
use agentquery::schema::Schema;
use serde_json::Value;
use std::sync::Arc;

pub fn sample_schema() -> (Arc<TaskStore>, Schema<Task>) {
    let store = Arc::new(TaskStore::with_sample_tasks());
    let schema = task_schema(Arc::clone(&store)).expect("task schema builds");
    (store, schema)
}

pub fn read(schema: &Schema<Task>, input: &str) -> Value {
    schema
        .execute(input)
        .unwrap_or_else(|err| panic!("{input:?} failed to parse: {err}"))
        .to_value()
}

pub fn mutate(schema: &Schema<Task>, input: &str, options: MutationOptions) -> Outcome {
    schema
        .mutate(input, &options)
        .unwrap_or_else(|err| panic!("{input:?} failed to parse: {err}"))
}

pub fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("a list result")
        .iter()
        .map(|row| row["id"].as_str().expect("an id column").to_string())
        .collect()
}
