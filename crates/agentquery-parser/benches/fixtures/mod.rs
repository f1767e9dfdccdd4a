pub const SIMPLE_QUERY: &str = "count()";

pub const TYPICAL_QUERY: &str =
    r#"list(status=in-progress, assignee="alice", sort_priority=desc, take=10) { id name status priority }"#;

/// A batch of `n` mixed queries separated by `;` and newlines.
pub fn synthetic_batch(n: usize) -> String {
    let mut out = String::new();
    for i in 0..n {
        match i % 4 {
            0 => out.push_str(&format!("get(task-{i}) {{ overview }}")),
            1 => out.push_str("list(status=done, skip=5, take=20) { id name status }"),
            2 => out.push_str(&format!(r#"update(task-{i}, title="Renamed \"{i}\"")"#)),
            _ => out.push_str("distinct(assignee)"),
        }
        out.push_str(";\n");
    }
    out
}
