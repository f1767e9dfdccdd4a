use crate::operation::MutationDef;
use crate::operation::OperationDef;
use crate::operation::OperationError;
use crate::pipeline::Predicate;
use crate::schema::FieldAccessor;
use crate::schema::FieldSelector;
use crate::schema::FilterAccessor;
use crate::schema::Loader;
use crate::schema::SortComparator;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// An immutable, fully-registered schema for element type `T`.
///
/// Built once by a [`SchemaBuilder`](crate::schema::SchemaBuilder) and then
/// shared. Query execution only reads from the schema, so one `Schema` can
/// serve concurrent callers.
pub struct Schema<T> {
    pub(crate) fields: IndexMap<String, FieldAccessor<T>>,
    pub(crate) presets: IndexMap<String, Vec<String>>,
    /// Effective projection for queries without `{...}`, presets already
    /// expanded.
    pub(crate) default_fields: Vec<String>,
    pub(crate) filterable_fields: IndexMap<String, FilterAccessor<T>>,
    pub(crate) sortable_fields: IndexMap<String, SortComparator<T>>,
    pub(crate) operations: IndexMap<String, OperationDef<T>>,
    pub(crate) mutations: IndexMap<String, MutationDef<T>>,
    pub(crate) loader: Option<Loader<T>>,
}

impl<T> Schema<T> {
    /// Field names in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn preset(&self, name: &str) -> Option<&[String]> {
        self.presets.get(name).map(Vec::as_slice)
    }

    pub fn default_fields(&self) -> &[String] {
        &self.default_fields
    }

    pub fn filterable_field_names(&self) -> impl Iterator<Item = &str> {
        self.filterable_fields.keys().map(String::as_str)
    }

    pub fn filter_accessor(&self, name: &str) -> Option<&FilterAccessor<T>> {
        self.filterable_fields.get(name)
    }

    pub fn sortable_field_names(&self) -> impl Iterator<Item = &str> {
        self.sortable_fields.keys().map(String::as_str)
    }

    pub fn sortable_comparator(&self, name: &str) -> Option<&SortComparator<T>> {
        self.sortable_fields.get(name)
    }

    pub fn operation(&self, name: &str) -> Option<&OperationDef<T>> {
        self.operations.get(name)
    }

    pub fn mutation(&self, name: &str) -> Option<&MutationDef<T>> {
        self.mutations.get(name)
    }

    pub fn has_mutations(&self) -> bool {
        !self.mutations.is_empty()
    }

    /// Loads the host's elements through the registered loader.
    pub fn load_items(&self) -> Result<Vec<T>, OperationError> {
        match &self.loader {
            Some(loader) => loader(),
            None => Err(OperationError::internal("no data loader registered on this schema")),
        }
    }

    /// Resolves a requested field list into a [`FieldSelector`].
    ///
    /// Each name is a preset (expanded in place) or a field. Presets win when
    /// a name is both, though the builder rejects that. Duplicates are
    /// dropped, keeping the first occurrence. An empty request selects the
    /// default fields.
    pub fn selector<'a>(&'a self, requested: &[&str]) -> Result<FieldSelector<'a, T>, OperationError> {
        if requested.is_empty() {
            return self.resolve_fields(self.default_fields.iter().map(String::as_str));
        }
        let mut expanded: Vec<&str> = vec![];
        for &name in requested {
            if let Some(preset_fields) = self.presets.get(name) {
                expanded.extend(preset_fields.iter().map(String::as_str));
            } else if self.fields.contains_key(name) {
                expanded.push(name);
            } else {
                return Err(OperationError::validation(format!("unknown field: {name}"))
                    .with_detail("field", name));
            }
        }
        self.resolve_fields(expanded)
    }

    fn resolve_fields<'r>(
        &self,
        names: impl IntoIterator<Item = &'r str>,
    ) -> Result<FieldSelector<'_, T>, OperationError> {
        let mut seen = IndexSet::new();
        let mut columns = vec![];
        for name in names {
            if !seen.insert(name) {
                continue;
            }
            let (column, accessor) = self.fields.get_key_value(name).ok_or_else(|| {
                OperationError::validation(format!("unknown field: {name}")).with_detail("field", name)
            })?;
            columns.push((column.as_str(), accessor));
        }
        Ok(FieldSelector::new(columns))
    }

    /// Builds the filter predicate for a query's keyed parameters.
    ///
    /// Unrecognized keys are ignored, so the result is match-all when no key
    /// names a filterable field.
    pub fn predicate<'a>(
        &'a self,
        named_args: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Predicate<'a, T> {
        named_args
            .into_iter()
            .fold(Predicate::match_all(), |predicate, (key, value)| {
                match self.filterable_fields.get(key) {
                    Some(accessor) => predicate.with_condition(accessor, value),
                    None => predicate,
                }
            })
    }
}

impl<T> std::fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("presets", &self.presets)
            .field("default_fields", &self.default_fields)
            .field("filterable_fields", &self.filterable_fields.keys().collect::<Vec<_>>())
            .field("sortable_fields", &self.sortable_fields.keys().collect::<Vec<_>>())
            .field("operations", &self.operations.keys().collect::<Vec<_>>())
            .field("mutations", &self.mutations.keys().collect::<Vec<_>>())
            .field("has_loader", &self.loader.is_some())
            .finish()
    }
}
