#[macro_export]
macro_rules! value {
    // Handle undefined
    (undefined) => {
        $crate::Value::Undefined
    };

    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::array(vec![$($crate::value!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::object(::std::iter::empty::<(&str, $crate::Value)>())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::Value::object([$(($key, $crate::value!($value))),*])
    };

    // Fallback for any serializable expression
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{inspect, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(undefined), Value::Undefined);
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(42.0));
        assert_eq!(value!(3.5), Value::Number(3.5));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(inspect(&value!([])), "[]");
        assert_eq!(inspect(&value!([1, 2, 3])), "[ 1, 2, 3 ]");
        assert_eq!(
            inspect(&value!([1, [true, null], "x"])),
            "[ 1, [ true, null ], 'x' ]"
        );
    }

    #[test]
    fn test_value_macro_objects() {
        assert_eq!(inspect(&value!({})), "{}");
        let obj = value!({
            "name": "Alice",
            "age": 30
        });
        assert_eq!(inspect(&obj), "{ name: 'Alice', age: 30 }");
    }

    #[test]
    fn test_value_macro_nesting() {
        let v = value!({
            "servers": [{ "host": "a" }, { "host": "b" }],
            "active": true
        });
        assert_eq!(
            inspect(&v),
            "{ servers: [ { host: 'a' }, { host: 'b' } ], active: true }"
        );
    }
}
