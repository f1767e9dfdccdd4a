use crate::operation::HandlerResult;
use crate::operation::MutationDef;
use crate::operation::MutationMetadata;
use crate::operation::OperationContext;
use crate::operation::OperationDef;
use crate::operation::OperationError;
use crate::operation::OperationMetadata;
use crate::schema::FieldAccessor;
use crate::schema::FilterAccessor;
use crate::schema::Loader;
use crate::schema::Schema;
use crate::schema::SortComparator;
use crate::schema::builtins;
use indexmap::IndexMap;
use serde_json::Value;
use std::cmp::Ordering;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Registers fields, presets, filters, sorts, operations and mutations for
/// element type `T`, then [`build`](Self::build)s an immutable [`Schema`].
///
/// Every registration validates immediately: registering a name twice in
/// the same namespace is an error at the call site, never a silent
/// overwrite.
///
/// # Example
///
/// ```
/// use agentquery_core::operation::Output;
/// use agentquery_core::schema::SchemaBuilder;
///
/// struct Task { id: String, status: String }
///
/// # fn main() -> Result<(), agentquery_core::schema::SchemaBuildError> {
/// let mut builder = SchemaBuilder::<Task>::new();
/// builder
///     .field("id", |t: &Task| t.id.clone())?
///     .field("status", |t: &Task| t.status.clone())?
///     .preset("minimal", ["id"])?
///     .operation("get", |ctx| {
///         let id = ctx.require_positional_arg("id")?;
///         Ok(Output::value(id))
///     })?;
/// let schema = builder.build()?;
/// assert!(schema.operation("get").is_some());
/// assert!(schema.operation("schema").is_some());
/// # Ok(())
/// # }
/// ```
pub struct SchemaBuilder<T> {
    fields: IndexMap<String, FieldAccessor<T>>,
    presets: IndexMap<String, Vec<String>>,
    default_fields: Option<Vec<String>>,
    filterable_fields: IndexMap<String, FilterAccessor<T>>,
    sortable_fields: IndexMap<String, SortComparator<T>>,
    operations: IndexMap<String, OperationDef<T>>,
    mutations: IndexMap<String, MutationDef<T>>,
    loader: Option<Loader<T>>,
}

impl<T: 'static> SchemaBuilder<T> {
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            presets: IndexMap::new(),
            default_fields: None,
            filterable_fields: IndexMap::new(),
            sortable_fields: IndexMap::new(),
            operations: IndexMap::new(),
            mutations: IndexMap::new(),
            loader: None,
        }
    }

    /// Registers a projectable field.
    pub fn field<V, F>(&mut self, name: impl Into<String>, accessor: F) -> Result<&mut Self>
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return Err(SchemaBuildError::DuplicateField { name });
        }
        if self.presets.contains_key(&name) {
            return Err(SchemaBuildError::PresetFieldNameCollision { name });
        }
        self.fields
            .insert(name, Box::new(move |item: &T| -> Value { accessor(item).into() }));
        Ok(self)
    }

    /// Registers a named bundle of fields. Every field must already be
    /// registered.
    pub fn preset<I, S>(&mut self, name: impl Into<String>, fields: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if self.presets.contains_key(&name) {
            return Err(SchemaBuildError::DuplicatePreset { name });
        }
        if self.fields.contains_key(&name) {
            return Err(SchemaBuildError::PresetFieldNameCollision { name });
        }
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(SchemaBuildError::EmptyPreset { preset: name });
        }
        if let Some(unknown) = fields.iter().find(|field| !self.fields.contains_key(*field)) {
            return Err(SchemaBuildError::PresetUnknownField {
                preset: name,
                field: unknown.clone(),
            });
        }
        self.presets.insert(name, fields);
        Ok(self)
    }

    /// Sets the projection used when a query has no `{...}`. Names may be
    /// fields or presets and are checked by [`build`](Self::build).
    ///
    /// Without this, all fields are projected in registration order.
    pub fn default_fields<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Registers a field that keyed query parameters filter on, by
    /// case-insensitive equality against `accessor`'s output.
    pub fn filterable_field<S, F>(&mut self, name: impl Into<String>, accessor: F) -> Result<&mut Self>
    where
        F: Fn(&T) -> S + Send + Sync + 'static,
        S: AsRef<str>,
    {
        let name = name.into();
        if self.filterable_fields.contains_key(&name) {
            return Err(SchemaBuildError::DuplicateFilterableField { name });
        }
        self.filterable_fields.insert(
            name,
            Box::new(move |item: &T| -> String { accessor(item).as_ref().to_string() }),
        );
        Ok(self)
    }

    /// Registers a sortable field ordered by the natural order of `key`.
    pub fn sortable_field<K, F>(&mut self, name: impl Into<String>, key: F) -> Result<&mut Self>
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
        K: Ord,
    {
        self.sortable_field_by(name, move |a: &T, b: &T| key(a).cmp(&key(b)))
    }

    /// Registers a sortable field with a custom total order, e.g. an
    /// enumerated rank rather than lexical order.
    pub fn sortable_field_by<F>(&mut self, name: impl Into<String>, compare: F) -> Result<&mut Self>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let name = name.into();
        if self.sortable_fields.contains_key(&name) {
            return Err(SchemaBuildError::DuplicateSortableField { name });
        }
        self.sortable_fields.insert(name, Box::new(compare));
        Ok(self)
    }

    pub fn operation<F>(&mut self, name: impl Into<String>, handler: F) -> Result<&mut Self>
    where
        F: Fn(&OperationContext<'_, T>) -> HandlerResult<T> + Send + Sync + 'static,
    {
        self.insert_operation(name.into(), handler, None)
    }

    pub fn operation_with_metadata<F>(
        &mut self,
        name: impl Into<String>,
        handler: F,
        metadata: OperationMetadata,
    ) -> Result<&mut Self>
    where
        F: Fn(&OperationContext<'_, T>) -> HandlerResult<T> + Send + Sync + 'static,
    {
        self.insert_operation(name.into(), handler, Some(metadata))
    }

    fn insert_operation<F>(
        &mut self,
        name: String,
        handler: F,
        metadata: Option<OperationMetadata>,
    ) -> Result<&mut Self>
    where
        F: Fn(&OperationContext<'_, T>) -> HandlerResult<T> + Send + Sync + 'static,
    {
        if self.operations.contains_key(&name) {
            return Err(SchemaBuildError::DuplicateOperation { name });
        }
        self.operations.insert(
            name.clone(),
            OperationDef {
                name,
                handler: Box::new(handler),
                metadata,
            },
        );
        Ok(self)
    }

    pub fn mutation<F>(&mut self, name: impl Into<String>, handler: F) -> Result<&mut Self>
    where
        F: Fn(&OperationContext<'_, T>) -> HandlerResult<T> + Send + Sync + 'static,
    {
        self.insert_mutation(name.into(), handler, None)
    }

    pub fn mutation_with_metadata<F>(
        &mut self,
        name: impl Into<String>,
        handler: F,
        metadata: MutationMetadata,
    ) -> Result<&mut Self>
    where
        F: Fn(&OperationContext<'_, T>) -> HandlerResult<T> + Send + Sync + 'static,
    {
        self.insert_mutation(name.into(), handler, Some(metadata))
    }

    fn insert_mutation<F>(
        &mut self,
        name: String,
        handler: F,
        metadata: Option<MutationMetadata>,
    ) -> Result<&mut Self>
    where
        F: Fn(&OperationContext<'_, T>) -> HandlerResult<T> + Send + Sync + 'static,
    {
        if self.mutations.contains_key(&name) {
            return Err(SchemaBuildError::DuplicateMutation { name });
        }
        self.mutations.insert(
            name.clone(),
            MutationDef {
                name,
                handler: Box::new(handler),
                metadata,
            },
        );
        Ok(self)
    }

    /// Sets the function handlers call (through `ctx.items()`) to load the
    /// host's elements. Replaces any earlier loader.
    pub fn loader<F>(&mut self, loader: F) -> &mut Self
    where
        F: Fn() -> std::result::Result<Vec<T>, OperationError> + Send + Sync + 'static,
    {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Validates the default projection, installs the built-in `schema()`
    /// and `distinct(field)` operations (unless the host registered those
    /// names itself) and freezes the registry.
    pub fn build(mut self) -> Result<Schema<T>> {
        let default_fields = self.resolve_default_fields()?;

        if !self.operations.contains_key(builtins::SCHEMA_OPERATION) {
            self.insert_operation(
                builtins::SCHEMA_OPERATION.to_string(),
                builtins::schema_operation::<T>,
                Some(builtins::schema_operation_metadata()),
            )?;
        }
        if !self.filterable_fields.is_empty()
            && !self.operations.contains_key(builtins::DISTINCT_OPERATION)
        {
            self.insert_operation(
                builtins::DISTINCT_OPERATION.to_string(),
                builtins::distinct_operation::<T>,
                Some(builtins::distinct_operation_metadata()),
            )?;
        }

        Ok(Schema {
            fields: self.fields,
            presets: self.presets,
            default_fields,
            filterable_fields: self.filterable_fields,
            sortable_fields: self.sortable_fields,
            operations: self.operations,
            mutations: self.mutations,
            loader: self.loader,
        })
    }

    fn resolve_default_fields(&self) -> Result<Vec<String>> {
        let Some(requested) = &self.default_fields else {
            return Ok(self.fields.keys().cloned().collect());
        };
        let mut resolved: Vec<String> = vec![];
        for name in requested {
            let expanded = match self.presets.get(name) {
                Some(preset_fields) => preset_fields.clone(),
                None if self.fields.contains_key(name) => vec![name.clone()],
                None => {
                    return Err(SchemaBuildError::UnknownDefaultField { field: name.clone() });
                },
            };
            for field in expanded {
                if !resolved.contains(&field) {
                    resolved.push(field);
                }
            }
        }
        Ok(resolved)
    }
}

impl<T: 'static> Default for SchemaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("field `{name}` is registered more than once")]
    DuplicateField { name: String },

    #[error("preset `{name}` is registered more than once")]
    DuplicatePreset { name: String },

    #[error("`{name}` cannot be both a field and a preset")]
    PresetFieldNameCollision { name: String },

    #[error("preset `{preset}` names no fields")]
    EmptyPreset { preset: String },

    #[error("preset `{preset}` references unregistered field `{field}`")]
    PresetUnknownField { preset: String, field: String },

    #[error("default field `{field}` is neither a registered field nor a preset")]
    UnknownDefaultField { field: String },

    #[error("filterable field `{name}` is registered more than once")]
    DuplicateFilterableField { name: String },

    #[error("sortable field `{name}` is registered more than once")]
    DuplicateSortableField { name: String },

    #[error("operation `{name}` is registered more than once")]
    DuplicateOperation { name: String },

    #[error("mutation `{name}` is registered more than once")]
    DuplicateMutation { name: String },
}
