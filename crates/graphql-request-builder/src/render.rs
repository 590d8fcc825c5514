mod arguments;
mod literal;
mod selection_set;

use std::fmt::Write;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    variable::VariableDefinition, BuildError, BuilderConfig, GraphqlRequest, Operation, OperationType, ParamValue,
    Variable,
};

/// Renders `operations` into a complete request of the given type.
///
/// The body is rendered first as it defines all the variables of the header.
#[tracing::instrument(skip_all, fields(operation_type = %operation_type, operations = operations.len()))]
pub(crate) fn build(
    config: &BuilderConfig,
    operation_type: OperationType,
    operations: &[Operation],
) -> Result<GraphqlRequest, BuildError> {
    let mut ctx = RenderContext::new(config);

    let body = {
        let mut buffer = String::with_capacity(256);
        ctx.write_operations(&mut buffer, operations)?;
        buffer
    };

    if body.is_empty() {
        return Err(BuildError::EmptyRequest);
    }

    let mut request = String::with_capacity(body.len() + 20 + ctx.estimated_variable_definitions_string_len);
    request.push_str(operation_type.as_str());

    if !ctx.variables.is_empty() {
        request.push('(');
        ctx.write_variable_definitions(&mut request)?;
        request.push(')');
    }

    write!(request, " {{ {body} }}")?;

    tracing::trace!(length = request.len(), variables = ctx.variables.len(), "rendered request");

    Ok(GraphqlRequest {
        request,
        variables: ctx.into_variable_values(),
    })
}

/// State of a single build call, threaded through every `write_*` method.
struct RenderContext<'a> {
    config: &'a BuilderConfig,
    /// Declared variables by key. The insertion order is the header order, a reused key
    /// keeps its first position but takes the last declaration.
    variables: IndexMap<&'a str, &'a Variable>,
    estimated_variable_definitions_string_len: usize,
    depth: usize,
}

impl<'a> RenderContext<'a> {
    fn new(config: &'a BuilderConfig) -> Self {
        Self {
            config,
            variables: IndexMap::new(),
            estimated_variable_definitions_string_len: 0,
            depth: 0,
        }
    }

    fn into_variable_values(self) -> IndexMap<String, ParamValue> {
        self.variables
            .into_iter()
            .map(|(key, variable)| (key.to_owned(), variable.value.clone()))
            .collect()
    }

    fn write_variable_definitions(&self, out: &mut String) -> Result<(), BuildError> {
        write!(
            out,
            "{}",
            self.variables
                .iter()
                .format_with(", ", |(&key, &variable), f| f(&VariableDefinition { key, variable }))
        )?;

        Ok(())
    }

    /// Writes sibling operations separated by a space, skipping the ones without a name.
    fn write_operations(&mut self, buffer: &mut String, operations: &'a [Operation]) -> Result<(), BuildError> {
        let mut operations = operations
            .iter()
            .filter(|operation| !operation.function_name.is_empty())
            .peekable();

        while let Some(operation) = operations.next() {
            self.write_operation(buffer, operation)?;

            if operations.peek().is_some() {
                buffer.push(' ');
            }
        }

        Ok(())
    }

    fn write_operation(&mut self, buffer: &mut String, operation: &'a Operation) -> Result<(), BuildError> {
        if let Some(alias) = operation.alias_str() {
            write!(buffer, "{alias}: ")?;
        }

        buffer.push_str(&operation.function_name);

        if operation.variables.is_empty() {
            self.write_parameters(buffer, &operation.params)?;
        } else {
            self.write_variable_arguments(buffer, &operation.variables)?;
        }

        self.write_selection_set(buffer, &operation.fields)
    }

    fn enter(&mut self) -> Result<(), BuildError> {
        self.depth += 1;

        match self.config.max_depth {
            Some(limit) if self.depth > limit => Err(BuildError::DepthLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
