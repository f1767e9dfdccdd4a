//! Header-once tabular rendering.
//!
//! ```text
//! id,name,status
//! task-1,Write docs,todo
//! task-2,"Fix bug, urgent",done
//! ```
//!
//! A row holding one empty cell is written as `""` so it never reads as a
//! blank line. Single records render as `field:value` lines. Anything holding a nested
//! array or object, any error or metadata slot, and any batch whose slots
//! differ in shape cannot be flattened; [`render`] returns `None` for those
//! and the caller falls back to structured output.

use crate::execution::Outcome;
use crate::execution::QueryResult;
use csv::QuoteStyle;
use csv::WriterBuilder;
use serde_json::Value;

/// A flattened slot, keyed by its column (or field) list so batches can
/// check that every slot has the same shape.
enum Block {
    Table { columns: Vec<String>, text: String },
    Record { fields: Vec<String>, text: String },
}

impl Block {
    fn text(&self) -> &str {
        match self {
            Self::Table { text, .. } | Self::Record { text, .. } => text,
        }
    }

    fn same_shape(&self, other: &Block) -> bool {
        match (self, other) {
            (Self::Table { columns: a, .. }, Self::Table { columns: b, .. }) => a == b,
            (Self::Record { fields: a, .. }, Self::Record { fields: b, .. }) => a == b,
            _ => false,
        }
    }
}

pub(super) fn render(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Single(result) => block_for(result).map(|block| block.text().to_string()),
        Outcome::Batch(results) => {
            let blocks = results.iter().map(block_for).collect::<Option<Vec<_>>>()?;
            let first = blocks.first()?;
            if !blocks.iter().all(|block| block.same_shape(first)) {
                return None;
            }
            Some(
                blocks
                    .iter()
                    .map(Block::text)
                    .collect::<Vec<_>>()
                    .join("\n"),
            )
        },
    }
}

fn block_for(result: &QueryResult) -> Option<Block> {
    match result {
        QueryResult::Records { columns, rows } => table(columns, rows.iter().map(Vec::as_slice)),
        QueryResult::Record { columns, values } => record(columns, values),
        QueryResult::Value(Value::Object(map)) if !map.is_empty() => {
            let fields: Vec<String> = map.keys().cloned().collect();
            let values: Vec<Value> = map.values().cloned().collect();
            record(&fields, &values)
        },
        QueryResult::Value(Value::Array(items)) if !items.is_empty() => {
            let Some(Value::Object(first)) = items.first() else {
                return None;
            };
            let columns: Vec<String> = first.keys().cloned().collect();
            let mut rows = Vec::with_capacity(items.len());
            for item in items {
                let Value::Object(map) = item else {
                    return None;
                };
                if map.len() != columns.len() || !map.keys().eq(columns.iter()) {
                    return None;
                }
                rows.push(map.values().cloned().collect::<Vec<_>>());
            }
            table(&columns, rows.iter().map(Vec::as_slice))
        },
        QueryResult::Value(_) | QueryResult::Metadata(_) | QueryResult::Error(_) => None,
    }
}

fn table<'v>(columns: &[String], rows: impl Iterator<Item = &'v [Value]>) -> Option<Block> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    writer.write_record(columns).ok()?;
    for row in rows {
        let cells = row.iter().map(scalar_text).collect::<Option<Vec<_>>>()?;
        writer.write_record(&cells).ok()?;
    }
    let text = String::from_utf8(writer.into_inner().ok()?).ok()?;
    Some(Block::Table {
        columns: columns.to_vec(),
        text,
    })
}

fn record(fields: &[String], values: &[Value]) -> Option<Block> {
    let mut text = String::new();
    for (field, value) in fields.iter().zip(values) {
        let scalar = scalar_text(value)?;
        text.push_str(field);
        text.push(':');
        text.push_str(&scalar.replace('\n', "\\n").replace('\r', "\\r"));
        text.push('\n');
    }
    Some(Block::Record {
        fields: fields.to_vec(),
        text,
    })
}

/// Text of a scalar value; `None` for arrays and objects.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
