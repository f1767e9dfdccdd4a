use crate::operation::OperationError;
use crate::pipeline::Page;
use crate::pipeline::Predicate;
use crate::pipeline::SortSpec;
use crate::pipeline::filter_items;
use crate::pipeline::sort_items;
use crate::schema::FieldSelector;
use crate::schema::Schema;
use agentquery_parser::ast;
use indexmap::IndexMap;

const DRY_RUN_ARG: &str = "dry_run";

/// Everything a handler gets for one query slot.
///
/// The predicate is always present (match-all when no keyed parameter names
/// a filterable field). Sorting and pagination are opt-in: handlers call
/// [`sort_specs`](Self::sort_specs), [`page`](Self::page) or
/// [`apply_pipeline`](Self::apply_pipeline) when they want them.
pub struct OperationContext<'a, T> {
    schema: &'a Schema<T>,
    operation: &'a str,
    positional_args: Vec<&'a str>,
    /// Keyed parameters. A repeated key keeps its last value.
    named_args: IndexMap<&'a str, &'a str>,
    selector: FieldSelector<'a, T>,
    predicate: Predicate<'a, T>,
    dry_run: bool,
}

impl<'a, T> OperationContext<'a, T> {
    pub(crate) fn for_read(
        schema: &'a Schema<T>,
        query: &'a ast::Query<'_>,
        selector: FieldSelector<'a, T>,
    ) -> Self {
        let named_args: IndexMap<&'a str, &'a str> = query.named_params().collect();
        Self {
            schema,
            operation: query.operation.as_str(),
            positional_args: query.positional_params().collect(),
            predicate: schema.predicate(named_args.iter().map(|(k, v)| (*k, *v))),
            named_args,
            selector,
            dry_run: false,
        }
    }

    /// Like [`for_read`](Self::for_read), but a truthy `dry_run` parameter
    /// (`true`, `1` or `yes`) is taken out of the keyed parameters and turns
    /// on dry-run mode, as does `dry_run_requested`.
    pub(crate) fn for_mutation(
        schema: &'a Schema<T>,
        query: &'a ast::Query<'_>,
        selector: FieldSelector<'a, T>,
        dry_run_requested: bool,
    ) -> Self {
        let mut ctx = Self::for_read(schema, query, selector);
        let dry_run_arg = ctx
            .named_args
            .get(DRY_RUN_ARG)
            .is_some_and(|value| is_truthy(value));
        if dry_run_arg {
            ctx.named_args.shift_remove(DRY_RUN_ARG);
            ctx.predicate = schema.predicate(ctx.named_args.iter().map(|(k, v)| (*k, *v)));
        }
        ctx.dry_run = dry_run_requested || dry_run_arg;
        ctx
    }

    pub fn schema(&self) -> &'a Schema<T> {
        self.schema
    }

    /// The operation or mutation name being invoked.
    pub fn operation(&self) -> &'a str {
        self.operation
    }

    pub fn selector(&self) -> &FieldSelector<'a, T> {
        &self.selector
    }

    pub fn predicate(&self) -> &Predicate<'a, T> {
        &self.predicate
    }

    /// True when the caller asked for a preview without side effects.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    // =========================================================================
    // Arguments
    // =========================================================================

    /// The first positional argument, conventionally an element id.
    pub fn positional_arg(&self) -> Option<&'a str> {
        self.positional_args.first().copied()
    }

    pub fn positional_args(&self) -> &[&'a str] {
        &self.positional_args
    }

    /// The first positional argument, or a `REQUIRED` error naming `what`.
    pub fn require_positional_arg(&self, what: &str) -> Result<&'a str, OperationError> {
        self.positional_arg().ok_or_else(|| {
            OperationError::required(format!("{} requires a {what} argument", self.operation))
                .with_detail("param", what)
        })
    }

    pub fn arg(&self, name: &str) -> Option<&'a str> {
        self.named_args.get(name).copied()
    }

    pub fn arg_or<'d>(&self, name: &str, default: &'d str) -> &'d str
    where
        'a: 'd,
    {
        self.arg(name).unwrap_or(default)
    }

    /// The named argument, or a `REQUIRED` error when it is absent.
    ///
    /// Only keyed parameters count; a positional argument never satisfies
    /// this.
    pub fn require_arg(&self, name: &str) -> Result<&'a str, OperationError> {
        self.arg(name).ok_or_else(|| {
            OperationError::required(format!("required parameter {name:?} is missing"))
                .with_detail("param", name)
        })
    }

    pub fn has_arg(&self, name: &str) -> bool {
        self.named_args.contains_key(name)
    }

    /// Keyed parameters in source order.
    pub fn named_args(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.named_args.iter().map(|(k, v)| (*k, *v))
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// Loads the host's elements through the schema's loader.
    pub fn items(&self) -> Result<Vec<T>, OperationError> {
        self.schema.load_items()
    }

    /// The `sort_<field>=asc|desc` directives, in order.
    pub fn sort_specs(&self) -> Result<Vec<SortSpec>, OperationError> {
        SortSpec::parse_all(self.named_args())
    }

    /// The `skip`/`take` window.
    pub fn page(&self) -> Result<Page, OperationError> {
        Page::parse(self.arg("skip"), self.arg("take"))
    }

    /// Filter, then stable sort, then paginate.
    ///
    /// Argument errors (bad sort direction, unknown sort field, bad
    /// `skip`/`take`) are reported before any work is done.
    pub fn apply_pipeline(&self, items: Vec<T>) -> Result<Vec<T>, OperationError> {
        let specs = self.sort_specs()?;
        let page = self.page()?;
        let mut items = filter_items(items, &self.predicate);
        sort_items(&mut items, &specs, self.schema)?;
        Ok(page.apply(items))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value, "true" | "1" | "yes")
}
