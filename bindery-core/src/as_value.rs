use crate::{Error, Result, Value};
use rust_decimal::Decimal;
use std::{any, borrow::Cow};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Conversion between native Rust types and the dynamically typed [`Value`]
/// carried by column modifications.
///
/// # Error semantics
/// - Integers convert from any narrower integer variant, and from wider ones
///   when the payload fits. Out of range payloads are an error naming both the
///   value and the target type.
/// - A typed `NULL` is an error unless the target is an `Option`.
///
/// # Examples
/// ```rust
/// use bindery_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert!(matches!(v, Value::Int32(Some(42))));
/// let n: i64 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue {
    /// The `NULL` value of this type's variant.
    fn as_empty_value() -> Value;
    /// Wrap `self` into its [`Value`] variant.
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

// `&str` is not `AsValue` (it cannot be produced by `try_from_value`), literals still convert
impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

fn conversion_error<T>(value: &Value) -> Error {
    Error::msg(format!(
        "Cannot convert {value:?} to {}",
        any::type_name::<T>()
    ))
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path $(, $other:path)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v)) => Ok(v),
                    $($other(Some(v)) => <$source>::try_from(v).map_err(|_| {
                        Error::msg(format!(
                            "Value {v} is out of range for {}",
                            any::type_name::<Self>(),
                        ))
                    }),)*
                    _ => Err(conversion_error::<Self>(&value)),
                }
            }
        }
    };
}
impl_as_value!(bool, Value::Boolean);
impl_as_value!(
    i8,
    Value::Int8,
    Value::Int16,
    Value::Int32,
    Value::Int64,
    Value::UInt8,
    Value::UInt16,
    Value::UInt32,
    Value::UInt64,
);
impl_as_value!(
    i16,
    Value::Int16,
    Value::Int8,
    Value::Int32,
    Value::Int64,
    Value::UInt8,
    Value::UInt16,
    Value::UInt32,
    Value::UInt64,
);
impl_as_value!(
    i32,
    Value::Int32,
    Value::Int8,
    Value::Int16,
    Value::Int64,
    Value::UInt8,
    Value::UInt16,
    Value::UInt32,
    Value::UInt64,
);
impl_as_value!(
    i64,
    Value::Int64,
    Value::Int8,
    Value::Int16,
    Value::Int32,
    Value::UInt8,
    Value::UInt16,
    Value::UInt32,
    Value::UInt64,
);
impl_as_value!(
    u8,
    Value::UInt8,
    Value::UInt16,
    Value::UInt32,
    Value::UInt64,
    Value::Int8,
    Value::Int16,
    Value::Int32,
    Value::Int64,
);
impl_as_value!(
    u16,
    Value::UInt16,
    Value::UInt8,
    Value::UInt32,
    Value::UInt64,
    Value::Int8,
    Value::Int16,
    Value::Int32,
    Value::Int64,
);
impl_as_value!(
    u32,
    Value::UInt32,
    Value::UInt8,
    Value::UInt16,
    Value::UInt64,
    Value::Int8,
    Value::Int16,
    Value::Int32,
    Value::Int64,
);
impl_as_value!(
    u64,
    Value::UInt64,
    Value::UInt8,
    Value::UInt16,
    Value::UInt32,
    Value::Int8,
    Value::Int16,
    Value::Int32,
    Value::Int64,
);
impl_as_value!(String, Value::Varchar);
impl_as_value!(Box<[u8]>, Value::Blob);
impl_as_value!(Date, Value::Date);
impl_as_value!(Time, Value::Time);
impl_as_value!(PrimitiveDateTime, Value::Timestamp);
impl_as_value!(OffsetDateTime, Value::TimestampWithTimezone);
impl_as_value!(Uuid, Value::Uuid);

impl AsValue for f32 {
    fn as_empty_value() -> Value {
        Value::Float32(None)
    }
    fn as_value(self) -> Value {
        Value::Float32(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float32(Some(v)) => Ok(v),
            Value::Float64(Some(v)) => {
                let result = v as f32;
                if result as f64 != v && !v.is_nan() {
                    return Err(Error::msg(format!(
                        "Value {v}: f64 cannot be represented as f32"
                    )));
                }
                Ok(result)
            }
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for f64 {
    fn as_empty_value() -> Value {
        Value::Float64(None)
    }
    fn as_value(self) -> Value {
        Value::Float64(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float64(Some(v)) => Ok(v),
            Value::Float32(Some(v)) => Ok(v as _),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for Decimal {
    fn as_empty_value() -> Value {
        Value::Decimal(None, 0, 0)
    }
    fn as_value(self) -> Value {
        Value::Decimal(Some(self), 0, self.scale() as _)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(Some(v), ..) => Ok(v),
            Value::Int8(Some(v)) => Ok(v.into()),
            Value::Int16(Some(v)) => Ok(v.into()),
            Value::Int32(Some(v)) => Ok(v.into()),
            Value::Int64(Some(v)) => Ok(v.into()),
            Value::UInt8(Some(v)) => Ok(v.into()),
            Value::UInt16(Some(v)) => Ok(v.into()),
            Value::UInt32(Some(v)) => Ok(v.into()),
            Value::UInt64(Some(v)) => Ok(v.into()),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for Vec<u8> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into_boxed_slice()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        <Box<[u8]>>::try_from_value(value).map(Into::into)
    }
}

impl<'a> AsValue for Cow<'a, str> {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.into_owned()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        String::try_from_value(value).map(Cow::Owned)
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(if value.is_null() {
            None
        } else {
            Some(<T as AsValue>::try_from_value(value)?)
        })
    }
}
