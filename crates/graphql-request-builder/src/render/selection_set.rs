use super::RenderContext;
use crate::{BuildError, Field};

impl<'a> RenderContext<'a> {
    /// Writes ` { a b }`, or nothing when there is no field to select.
    ///
    /// Nested operations share the variables of the whole request, the header is only
    /// written once by the outermost call.
    pub(super) fn write_selection_set(&mut self, buffer: &mut String, fields: &'a [Field]) -> Result<(), BuildError> {
        let mut fields = fields.iter().filter(|field| !field.name().is_empty()).peekable();

        if fields.peek().is_none() {
            return Ok(());
        }

        self.enter()?;
        buffer.push_str(" { ");

        while let Some(field) = fields.next() {
            match field {
                Field::Name(name) => buffer.push_str(name),
                Field::Group { name, fields: group } => {
                    buffer.push_str(name);
                    self.write_selection_set(buffer, group)?;
                }
                Field::Operation(operation) => self.write_operation(buffer, operation)?,
            }

            if fields.peek().is_some() {
                buffer.push(' ');
            }
        }

        buffer.push_str(" }");
        self.leave();

        Ok(())
    }
}
