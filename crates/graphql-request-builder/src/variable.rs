use std::fmt;

use indexmap::IndexMap;

use crate::ParamValue;

/// Variables of an operation, keyed by the identifier used after `$` in the request.
pub type VariableMap = IndexMap<String, Variable>;

/// A variable bound to one argument of an operation.
///
/// The map key under which the variable is stored becomes the `$key` identifier, while
/// [`Variable::name`] is the argument receiving it. Both may differ, which lets several
/// aliased operations pass a different value to the same argument within one request.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Variable {
    /// Name of the GraphQL input type, without any wrapping.
    #[serde(rename = "type")]
    pub ty: String,
    /// Argument the variable is bound to.
    pub name: String,
    pub value: ParamValue,
    #[serde(default)]
    pub list: bool,
    #[serde(default)]
    pub required: bool,
}

impl Variable {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            value: value.into(),
            list: false,
            required: false,
        }
    }

    /// Wraps the declared type in a list.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.list = true;
        self
    }

    /// Marks the declared type as non-null.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Renders `$key: Type` as it appears in the operation header.
pub(crate) struct VariableDefinition<'a> {
    pub key: &'a str,
    pub variable: &'a Variable,
}

impl fmt::Display for VariableDefinition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let VariableDefinition { key, variable } = self;
        let bang = if variable.required { "!" } else { "" };

        if variable.list {
            write!(f, "${key}: [{}{bang}]", variable.ty)
        } else {
            write!(f, "${key}: {}{bang}", variable.ty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(variable: &Variable) -> String {
        VariableDefinition { key: "v", variable }.to_string()
    }

    #[test]
    fn wrapping() {
        let variable = Variable::new("ID", "id", "1");

        assert_eq!(definition(&variable), "$v: ID");
        assert_eq!(definition(&variable.clone().required()), "$v: ID!");
        assert_eq!(definition(&variable.clone().list()), "$v: [ID]");
        assert_eq!(definition(&variable.list().required()), "$v: [ID!]");
    }
}
