use std::{fmt, ops::Deref};

use crate::{Field, ParamMap, ParamValue, Variable, VariableMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single invocation inside the request body, or a parameterized field of a selection set.
///
/// When `variables` is not empty the arguments are rendered as variable references and
/// `params` is ignored.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Alias written as `key: functionName`.
    #[serde(default)]
    pub key: Option<String>,
    /// Operations without a name render nothing.
    #[serde(default)]
    pub function_name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub params: ParamMap,
    #[serde(default)]
    pub variables: VariableMap,
}

impl Operation {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn alias(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    #[must_use]
    pub fn fields<T>(mut self, fields: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Field>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn variable(mut self, key: impl Into<String>, variable: Variable) -> Self {
        self.variables.insert(key.into(), variable);
        self
    }

    pub(crate) fn alias_str(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.is_empty())
    }
}

/// An ordered list of operations, deserializable from a single operation or an array of them.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(from = "OneOrMany")]
pub struct Operations(Vec<Operation>);

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Operation>),
    One(Operation),
}

impl From<OneOrMany> for Operations {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::Many(operations) => Operations(operations),
            OneOrMany::One(operation) => Operations(vec![operation]),
        }
    }
}

impl Deref for Operations {
    type Target = [Operation];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Operation> for Operations {
    fn from(operation: Operation) -> Self {
        Operations(vec![operation])
    }
}

impl From<Vec<Operation>> for Operations {
    fn from(operations: Vec<Operation>) -> Self {
        Operations(operations)
    }
}

impl FromIterator<Operation> for Operations {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Operations(iter.into_iter().collect())
    }
}

impl IntoIterator for Operations {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
