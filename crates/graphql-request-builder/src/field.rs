use indexmap::IndexMap;

use crate::Operation;

/// One entry of a selection set.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(try_from = "RawField")]
pub enum Field {
    /// A leaf field, rendered as its name.
    Name(String),
    /// A field with its own selection set and no arguments.
    Group { name: String, fields: Vec<Field> },
    /// A field with arguments or variables, and possibly its own selection set.
    Operation(Operation),
}

impl Field {
    pub fn group<T>(name: impl Into<String>, fields: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Field>,
    {
        Field::Group {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The name written for this field, without alias or arguments.
    pub fn name(&self) -> &str {
        match self {
            Field::Name(name) | Field::Group { name, .. } => name,
            Field::Operation(operation) => &operation.function_name,
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::Name(name.to_owned())
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::Name(name)
    }
}

impl From<Operation> for Field {
    fn from(operation: Operation) -> Self {
        Field::Operation(operation)
    }
}

// `Group` must come before `Operation`: every field of an operation is optional, so any object
// would deserialize as one. An operation never matches a group as its `functionName` is a string.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawField {
    Name(String),
    Group(IndexMap<String, Vec<Field>>),
    Operation(Operation),
}

impl TryFrom<RawField> for Field {
    type Error = String;

    fn try_from(value: RawField) -> Result<Self, Self::Error> {
        match value {
            RawField::Name(name) => Ok(Field::Name(name)),
            RawField::Operation(operation) => Ok(Field::Operation(operation)),
            RawField::Group(group) => {
                let count = group.len();
                let mut entries = group.into_iter();

                match (entries.next(), entries.next()) {
                    (Some((name, fields)), None) => Ok(Field::Group { name, fields }),
                    _ => Err(format!(
                        "a nested field group must contain exactly one field name, found {count}"
                    )),
                }
            }
        }
    }
}
