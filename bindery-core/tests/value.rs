#[cfg(test)]
mod tests {
    use bindery_core::{AsValue, Value};
    use rust_decimal::Decimal;
    use std::{borrow::Cow, str::FromStr};
    use time::{Date, Month};
    use uuid::Uuid;

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert_eq!(Option::<i32>::None.as_value(), Value::Int32(None));
        assert_eq!(Option::<i32>::try_from_value(Value::Int32(None)).unwrap(), None);
        assert_eq!(Option::<i32>::try_from_value(Value::Null).unwrap(), None);
        assert!(i32::try_from_value(Value::Int32(None)).is_err());
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(Some(false)));
        assert_ne!(val, Value::Boolean(None));
        assert_ne!(val, Value::Varchar(Some("true".into())));
        assert!(bool::try_from_value(val).unwrap());
        assert!(bool::try_from_value(Value::Int8(Some(1))).is_err());
    }

    #[test]
    fn value_integers() {
        let val: Value = 127i8.into();
        assert_eq!(val, Value::Int8(Some(127)));
        assert_eq!(i64::try_from_value(val).unwrap(), 127);
        assert_eq!(i8::try_from_value(Value::UInt8(Some(99))).unwrap(), 99);
        assert!(i8::try_from_value(Value::UInt8(Some(200))).is_err());
        assert!(u16::try_from_value(Value::Int32(Some(-1))).is_err());
        assert_eq!(u64::try_from_value(Value::Int16(Some(5))).unwrap(), 5);
        assert_eq!(i32::try_from_value(Value::Int64(Some(-42))).unwrap(), -42);
        assert!(i32::try_from_value(Value::Int64(Some(i64::MAX))).is_err());
        assert!(i32::try_from_value(Value::Float64(Some(1.0))).is_err());
        assert_ne!(Value::Int16(Some(1)), Value::Int32(Some(1)));
    }

    #[test]
    fn value_floats() {
        let val: Value = 1.5f32.into();
        assert_eq!(val, Value::Float32(Some(1.5)));
        assert_eq!(f64::try_from_value(val).unwrap(), 1.5);
        assert_eq!(f32::try_from_value(Value::Float64(Some(0.25))).unwrap(), 0.25);
        assert!(f32::try_from_value(Value::Float64(Some(0.1))).is_err());
    }

    #[test]
    fn value_decimal() {
        let decimal = Decimal::from_str("12.50").unwrap();
        let val = decimal.as_value();
        assert_eq!(val, Value::Decimal(Some(decimal), 0, 2));
        assert_eq!(Decimal::try_from_value(val).unwrap(), decimal);
        assert_eq!(
            Decimal::try_from_value(Value::Int32(Some(7))).unwrap(),
            Decimal::from(7)
        );
    }

    #[test]
    fn value_strings() {
        let val: Value = "hello".into();
        assert_eq!(val, Value::Varchar(Some("hello".into())));
        assert_eq!(String::try_from_value(val.clone()).unwrap(), "hello");
        assert_eq!(Cow::<str>::try_from_value(val).unwrap(), "hello");
        assert!(String::try_from_value(Value::Int8(Some(1))).is_err());
    }

    #[test]
    fn value_from_literal() {
        let literal: Value = "literal".into();
        assert_eq!(literal, Cow::Borrowed("literal").as_value());
        assert_eq!(literal, String::from("literal").as_value());
        assert_eq!(String::try_from_value(literal).unwrap(), "literal");
    }

    #[test]
    fn value_blob() {
        let val = vec![1u8, 2, 3].as_value();
        assert_eq!(val, Value::Blob(Some([1, 2, 3].into())));
        assert_eq!(Vec::<u8>::try_from_value(val).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn value_temporal_and_uuid() {
        let date = Date::from_calendar_date(2024, Month::March, 9).unwrap();
        assert_eq!(Date::try_from_value(date.as_value()).unwrap(), date);
        let uuid = Uuid::from_u128(0x1234);
        assert_eq!(uuid.as_value(), Value::Uuid(Some(uuid)));
        assert!(Uuid::try_from_value(date.as_value()).is_err());
    }
}
