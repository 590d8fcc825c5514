use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};

/// Arguments of an operation or fields of an input object, in insertion order.
pub type ParamMap = IndexMap<String, ParamValue>;

/// A value given to an argument, either inline or through a variable.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum ParamValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Rendered as a quoted ISO-8601 instant with millisecond precision.
    DateTime(DateTime<Utc>),
    List(Vec<ParamValue>),
    /// Rendered as a GraphQL input object.
    Object(ParamMap),
}

impl ParamValue {
    pub fn list<T>(items: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<ParamValue>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

pub(crate) fn iso_8601(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl serde::Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ParamValue::Null => serializer.serialize_unit(),
            ParamValue::Boolean(value) => serializer.serialize_bool(*value),
            ParamValue::Int(value) => serializer.serialize_i64(*value),
            ParamValue::Float(value) => serializer.serialize_f64(*value),
            ParamValue::String(value) => serializer.serialize_str(value),
            ParamValue::DateTime(value) => serializer.serialize_str(&iso_8601(value)),
            ParamValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ParamValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ParamValue::Null,
            serde_json::Value::Bool(value) => ParamValue::Boolean(value),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(value) => ParamValue::Int(value),
                None => number.as_f64().map(ParamValue::Float).unwrap_or(ParamValue::Null),
            },
            serde_json::Value::String(value) => ParamValue::String(value),
            serde_json::Value::Array(items) => ParamValue::List(items.into_iter().map(Into::into).collect()),
            serde_json::Value::Object(entries) => {
                ParamValue::Object(entries.into_iter().map(|(key, value)| (key, value.into())).collect())
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Boolean(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, u8, u16, u32);

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(f64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        ParamValue::DateTime(value)
    }
}

impl From<ParamMap> for ParamValue {
    fn from(value: ParamMap) -> Self {
        ParamValue::Object(value)
    }
}

impl<T> From<Vec<T>> for ParamValue
where
    T: Into<ParamValue>,
{
    fn from(value: Vec<T>) -> Self {
        ParamValue::list(value)
    }
}

impl<T> From<Option<T>> for ParamValue
where
    T: Into<ParamValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParamValue::Null)
    }
}
