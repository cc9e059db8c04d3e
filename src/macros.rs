/// Builds an [`IniValue`](crate::IniValue) from a JSON-like literal.
///
/// Objects become sections, so a whole document is written as `ini!({ .. })`.
/// Any other expression goes through [`to_value`](crate::to_value).
///
/// # Examples
///
/// ```rust
/// use serde_ini::{ini, Value};
///
/// let port = 8080;
/// let doc = ini!({
///     "debug": true,
///     "server": { "host": "localhost", "port": port },
///     "hosts": ["a", "b"]
/// });
///
/// let server = doc.as_section().unwrap()["server"].as_section().unwrap();
/// assert_eq!(server.get("host"), Some(&Value::from("localhost")));
/// ```
#[macro_export]
macro_rules! ini {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::ini!($elem)),*])
    };

    ({}) => {
        $crate::Value::Section($crate::IniMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut section = $crate::IniMap::new();
        $(
            section.insert($key.to_string(), $crate::ini!($value));
        )*
        $crate::Value::Section(section)
    }};

    // anything serializable, including string literals
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
