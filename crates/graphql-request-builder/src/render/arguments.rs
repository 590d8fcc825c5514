use std::fmt::Write;

use itertools::Itertools;

use super::RenderContext;
use crate::{BuildError, ParamMap, VariableMap};

impl<'a> RenderContext<'a> {
    /// Writes `(name: $key, ...)` and declares every variable for the operation header.
    pub(super) fn write_variable_arguments(
        &mut self,
        buffer: &mut String,
        variables: &'a VariableMap,
    ) -> Result<(), BuildError> {
        for (key, variable) in variables {
            // `$`, `: `, `[]!` and `, ` besides the key and type
            self.estimated_variable_definitions_string_len += key.len() + variable.ty.len() + 8;
            self.variables.insert(key.as_str(), variable);
        }

        write!(
            buffer,
            "({})",
            variables
                .iter()
                .format_with(", ", |(key, variable), f| f(&format_args!("{}: ${key}", variable.name)))
        )?;

        Ok(())
    }

    /// Writes the inline arguments of an operation, nothing at all when there are none.
    pub(super) fn write_parameters(&mut self, buffer: &mut String, params: &ParamMap) -> Result<(), BuildError> {
        if params.is_empty() {
            return Ok(());
        }

        buffer.push('(');
        self.write_entries(buffer, params)?;
        buffer.push(')');

        Ok(())
    }
}
