use crate::execution::Outcome;
use crate::execution::QueryResult;
use crate::operation::MutationOptions;
use crate::operation::OperationContext;
use crate::operation::OperationError;
use crate::operation::validate_mutation_args;
use crate::output;
use crate::output::OutputMode;
use crate::schema::Schema;
use agentquery_parser::ParseError;
use agentquery_parser::ast;

/// Which registry namespace a batch resolves against.
#[derive(Clone, Copy, Debug)]
enum Namespace {
    Read,
    Mutation(MutationOptions),
}

impl<T: 'static> Schema<T> {
    /// Parses `input` and runs every query against the read operations.
    ///
    /// A syntax error anywhere fails the whole call before anything runs.
    /// Otherwise each query gets its own slot; a failing query yields an
    /// error slot without affecting the others.
    pub fn execute(&self, input: &str) -> Result<Outcome, ParseError> {
        self.execute_in(input, Namespace::Read)
    }

    /// Parses `input` and runs every query against the mutations.
    pub fn mutate(&self, input: &str, options: &MutationOptions) -> Result<Outcome, ParseError> {
        self.execute_in(input, Namespace::Mutation(*options))
    }

    /// [`execute`](Self::execute) and render. Parse errors are rendered as
    /// error payloads, so this always yields output.
    pub fn run(&self, input: &str, mode: OutputMode) -> String {
        match self.execute(input) {
            Ok(outcome) => output::render(&outcome, mode),
            Err(err) => output::render_parse_error(&err),
        }
    }

    /// [`mutate`](Self::mutate) and render.
    pub fn run_mutation(&self, input: &str, options: &MutationOptions, mode: OutputMode) -> String {
        match self.mutate(input, options) {
            Ok(outcome) => output::render(&outcome, mode),
            Err(err) => output::render_parse_error(&err),
        }
    }

    fn execute_in(&self, input: &str, namespace: Namespace) -> Result<Outcome, ParseError> {
        let batch = agentquery_parser::parse(input)?;
        log::debug!(
            "executing batch of {} {:?} quer{}",
            batch.len(),
            namespace,
            if batch.is_single() { "y" } else { "ies" },
        );
        let results = batch
            .queries
            .iter()
            .map(|query| {
                let result = match namespace {
                    Namespace::Read => self.execute_read(query),
                    Namespace::Mutation(options) => self.execute_mutation(query, &options),
                };
                let result = result.unwrap_or_else(QueryResult::Error);
                log::trace!(
                    "query `{}` at {} -> {}",
                    query.operation.as_str(),
                    query.span.start_inclusive,
                    result.error().map_or("ok", |err| err.code().as_str()),
                );
                result
            })
            .collect();
        Ok(Outcome::from_results(results))
    }

    fn execute_read(&self, query: &ast::Query<'_>) -> Result<QueryResult, OperationError> {
        let name = query.operation.as_str();
        let def = self.operations.get(name).ok_or_else(|| {
            OperationError::not_found(format!("unknown operation: {name}"))
                .with_detail("operation", name)
        })?;
        let selector = self.selector(&requested_fields(query))?;
        let ctx = OperationContext::for_read(self, query, selector);
        let output = (def.handler)(&ctx)?;
        Ok(ctx.selector().project(output))
    }

    /// Resolution, then the confirmation check for destructive mutations,
    /// then field and argument validation, then the handler.
    fn execute_mutation(
        &self,
        query: &ast::Query<'_>,
        options: &MutationOptions,
    ) -> Result<QueryResult, OperationError> {
        let name = query.operation.as_str();
        let def = self.mutations.get(name).ok_or_else(|| {
            OperationError::not_found(format!("unknown mutation: {name}"))
                .with_detail("mutation", name)
        })?;
        if def.is_destructive() && !options.confirmed {
            log::warn!("refusing destructive mutation `{name}` without confirmation");
            return Err(OperationError::forbidden(format!(
                "mutation {name:?} is destructive and requires confirmation",
            ))
            .with_detail("mutation", name)
            .with_detail("destructive", true));
        }
        let selector = self.selector(&requested_fields(query))?;
        let ctx = OperationContext::for_mutation(self, query, selector, options.dry_run);
        if let Some(metadata) = def.metadata() {
            validate_mutation_args(&ctx, metadata)?;
        }
        let output = (def.handler)(&ctx)?;
        Ok(ctx.selector().project(output))
    }
}

fn requested_fields<'q>(query: &'q ast::Query<'_>) -> Vec<&'q str> {
    query
        .field_spec
        .iter()
        .flat_map(|spec| spec.iter_names())
        .collect()
}
