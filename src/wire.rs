//! The field-mapping engine between wire JSON and typed records.
//!
//! The upstream payloads are flat, prefix-laden and partially optional:
//! season fields arrive as `season_id`/`season_name`, home-team fields sit
//! under a `home_team_*` prefix family, and so on. Rather than annotate
//! every struct with bespoke serde impls, each record declares its mapping
//! once by implementing [`FromWire`] (and, where the record is ever written
//! back out, [`ToWire`]) in terms of the helpers here:
//!
//! - [`required`] / [`optional`] for direct or renamed keys,
//! - [`remove_prefix`] / [`add_prefix`] for bulk prefix stripping on a
//!   wire sub-object before recursing into the nested record's decoder,
//! - [`split_prefixed`] for partitioning sibling keys of a flattened
//!   parent into a standalone sub-object,
//! - [`required_scalar`] / [`optional_scalar`] for delegation to a named
//!   codec from [`crate::codec`].
//!
//! Unknown wire keys are ignored everywhere: the upstream schema evolves
//! additively and decode is open-world.

use serde_json::{Map, Value};

use crate::error::{DataError, Result};

/// A parsed wire JSON object.
pub type WireObject = Map<String, Value>;

/// Decode one record (or scalar) from its wire representation.
pub trait FromWire: Sized {
    fn from_wire(value: &Value) -> Result<Self>;
}

/// Encode one record (or scalar) back into its wire representation.
///
/// The default body reports [`DataError::UnsupportedEncoding`], so records
/// that are only ever read from the wire opt out of encoding explicitly.
pub trait ToWire {
    fn to_wire(&self) -> Result<Value> {
        Err(DataError::UnsupportedEncoding {
            kind: std::any::type_name::<Self>(),
        })
    }
}

/// Add `prefix` to every key of `obj`.
pub fn add_prefix(obj: &WireObject, prefix: &str) -> WireObject {
    obj.iter()
        .map(|(k, v)| (format!("{prefix}{k}"), v.clone()))
        .collect()
}

/// Remove `prefix` from every key of `obj` that carries it.
///
/// Keys without the prefix pass through untouched; `country` stays
/// `country` inside a `home_team_*` sub-object.
pub fn remove_prefix(obj: &WireObject, prefix: &str) -> WireObject {
    obj.iter()
        .map(|(k, v)| {
            let key = k.strip_prefix(prefix).unwrap_or(k);
            (key.to_string(), v.clone())
        })
        .collect()
}

/// Partition the keys of a flattened parent by `prefix`, yielding a
/// standalone object holding only the matching keys, stripped.
pub fn split_prefixed(obj: &WireObject, prefix: &str) -> WireObject {
    obj.iter()
        .filter_map(|(k, v)| {
            k.strip_prefix(prefix)
                .map(|key| (key.to_string(), v.clone()))
        })
        .collect()
}

/// View a wire value as an object, or fail.
pub fn object(value: &Value) -> Result<&WireObject> {
    value.as_object().ok_or_else(|| DataError::MalformedScalar {
        value: value.to_string(),
        expected: "JSON object",
    })
}

/// Extract a required field. Absent or `null` fails the record decode.
pub fn required<T: FromWire>(obj: &WireObject, key: &str) -> Result<T> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(DataError::MissingRequiredField {
            field: key.to_string(),
        }),
        Some(v) => T::from_wire(v),
    }
}

/// Extract an optional field. Absent or `null` decodes to `None`.
pub fn optional<T: FromWire>(obj: &WireObject, key: &str) -> Result<Option<T>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => T::from_wire(v).map(Some),
    }
}

/// Extract a required field through a named scalar codec.
pub fn required_scalar<T>(
    obj: &WireObject,
    key: &str,
    decode: impl FnOnce(&str) -> Result<T>,
) -> Result<T> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(DataError::MissingRequiredField {
            field: key.to_string(),
        }),
        Some(v) => decode(as_str(v)?),
    }
}

/// Extract an optional field through a named scalar codec.
///
/// Absent, `null` and the empty string all decode to `None`; the upstream
/// emits all three for "no value".
pub fn optional_scalar<T>(
    obj: &WireObject,
    key: &str,
    decode: impl FnOnce(&str) -> Result<T>,
) -> Result<Option<T>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => match as_str(v)? {
            "" => Ok(None),
            s => decode(s).map(Some),
        },
    }
}

/// Decode a required nested record held under `key` with its keys carrying
/// `prefix` (e.g. the `competition` sub-object of a match, whose keys are
/// `competition_id`, `competition_name`, ...).
pub fn prefixed<T: FromWire>(obj: &WireObject, key: &str, prefix: &str) -> Result<T> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(DataError::MissingRequiredField {
            field: key.to_string(),
        }),
        Some(v) => T::from_wire(&Value::Object(remove_prefix(object(v)?, prefix))),
    }
}

/// Insert an encoded field.
pub fn insert<T: ToWire>(obj: &mut WireObject, key: &str, value: &T) -> Result<()> {
    obj.insert(key.to_string(), value.to_wire()?);
    Ok(())
}

/// Insert an encoded field, skipping `None` entirely.
pub fn insert_opt<T: ToWire>(obj: &mut WireObject, key: &str, value: &Option<T>) -> Result<()> {
    if let Some(v) = value {
        obj.insert(key.to_string(), v.to_wire()?);
    }
    Ok(())
}

/// Insert a nested record under `key`, re-adding `prefix` to its keys.
pub fn insert_prefixed<T: ToWire>(
    obj: &mut WireObject,
    key: &str,
    prefix: &str,
    value: &T,
) -> Result<()> {
    let encoded = value.to_wire()?;
    let sub = add_prefix(object(&encoded)?, prefix);
    obj.insert(key.to_string(), Value::Object(sub));
    Ok(())
}

/// Insert a field through a named scalar codec.
pub fn insert_scalar<T>(obj: &mut WireObject, key: &str, encode: impl FnOnce(&T) -> String, value: &T) {
    obj.insert(key.to_string(), Value::String(encode(value)));
}

/// Insert an optional field through a named scalar codec, skipping `None`.
pub fn insert_scalar_opt<T>(
    obj: &mut WireObject,
    key: &str,
    encode: impl FnOnce(&T) -> String,
    value: &Option<T>,
) {
    if let Some(v) = value {
        obj.insert(key.to_string(), Value::String(encode(v)));
    }
}

fn as_str(value: &Value) -> Result<&str> {
    value.as_str().ok_or_else(|| DataError::MalformedScalar {
        value: value.to_string(),
        expected: "string",
    })
}

// Wire impls for the scalars records are built from.

impl FromWire for String {
    fn from_wire(value: &Value) -> Result<Self> {
        as_str(value).map(str::to_string)
    }
}

impl ToWire for String {
    fn to_wire(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl FromWire for bool {
    fn from_wire(value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| DataError::MalformedScalar {
            value: value.to_string(),
            expected: "boolean",
        })
    }
}

impl ToWire for bool {
    fn to_wire(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

impl FromWire for f64 {
    fn from_wire(value: &Value) -> Result<Self> {
        value.as_f64().ok_or_else(|| DataError::MalformedScalar {
            value: value.to_string(),
            expected: "number",
        })
    }
}

impl ToWire for f64 {
    fn to_wire(&self) -> Result<Value> {
        serde_json::Number::from_f64(*self)
            .map(Value::Number)
            .ok_or(DataError::UnsupportedEncoding {
                kind: "non-finite f64",
            })
    }
}

macro_rules! unsigned_wire {
    ($($ty:ty),+) => {
        $(
            impl FromWire for $ty {
                fn from_wire(value: &Value) -> Result<Self> {
                    value
                        .as_u64()
                        .and_then(|n| n.try_into().ok())
                        .ok_or_else(|| DataError::MalformedScalar {
                            value: value.to_string(),
                            expected: concat!("unsigned integer (", stringify!($ty), ")"),
                        })
                }
            }

            impl ToWire for $ty {
                fn to_wire(&self) -> Result<Value> {
                    Ok(Value::from(*self))
                }
            }
        )+
    };
}

unsigned_wire!(u8, u16, u32, u64);

impl FromWire for uuid::Uuid {
    fn from_wire(value: &Value) -> Result<Self> {
        as_str(value).and_then(|s| {
            uuid::Uuid::parse_str(s).map_err(|_| DataError::MalformedScalar {
                value: s.to_string(),
                expected: "UUID",
            })
        })
    }
}

impl ToWire for uuid::Uuid {
    fn to_wire(&self) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }
}

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(value: &Value) -> Result<Self> {
        match value.as_array() {
            Some(items) => items.iter().map(T::from_wire).collect(),
            None => Err(DataError::MalformedScalar {
                value: value.to_string(),
                expected: "JSON array",
            }),
        }
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self) -> Result<Value> {
        self.iter().map(T::to_wire).collect::<Result<Vec<_>>>().map(Value::Array)
    }
}

#[cfg(test)]
mod tests;
