use crate::schema::Schema;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

impl<T> Schema<T> {
    /// Builds the self-description served by `schema()`.
    ///
    /// Always computed from the current registry, never cached. Keys:
    /// `operations` and `mutations` (sorted), `operationMetadata` and
    /// `mutationMetadata` (only names that carry metadata), `filterableFields`
    /// and `sortableFields`, `fields` (registration order), `presets` and
    /// `defaultFields`.
    pub fn introspect(&self) -> Value {
        let mut operations: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        operations.sort_unstable();
        let operation_metadata: Map<String, Value> = operations
            .iter()
            .filter_map(|name| {
                let meta = self.operations.get(*name)?.metadata.as_ref()?;
                Some(((*name).to_string(), to_json(meta)))
            })
            .collect();

        let mut mutations: Vec<&str> = self.mutations.keys().map(String::as_str).collect();
        mutations.sort_unstable();
        let mutation_metadata: Map<String, Value> = mutations
            .iter()
            .filter_map(|name| {
                let meta = self.mutations.get(*name)?.metadata.as_ref()?;
                Some(((*name).to_string(), to_json(meta)))
            })
            .collect();

        let presets: Map<String, Value> = self
            .presets
            .iter()
            .map(|(name, fields)| (name.clone(), Value::from(fields.clone())))
            .collect();

        json!({
            "operations": operations,
            "operationMetadata": operation_metadata,
            "mutations": mutations,
            "mutationMetadata": mutation_metadata,
            "filterableFields": self.filterable_field_names().collect::<Vec<_>>(),
            "sortableFields": self.sortable_field_names().collect::<Vec<_>>(),
            "fields": self.field_names().collect::<Vec<_>>(),
            "presets": presets,
            "defaultFields": self.default_fields,
        })
    }
}

fn to_json(meta: &impl Serialize) -> Value {
    serde_json::to_value(meta).unwrap_or(Value::Null)
}
