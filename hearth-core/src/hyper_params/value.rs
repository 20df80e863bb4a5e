//! Values of hyper-parameters.
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// A value of a hyper-parameter.
///
/// Serialized untagged, so YAML such as `gamma: 0.99` or `layers: [64, 64]`
/// maps directly onto the variants.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum HyperParamValue {
    /// Boolean flag.
    Bool(bool),

    /// Integer.
    Int(i64),

    /// Floating-point number.
    Float(f64),

    /// Text.
    Str(String),

    /// Ordered collection of values.
    List(Vec<HyperParamValue>),
}

impl HyperParamValue {
    /// Name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
        }
    }
}

impl fmt::Display for HyperParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            // Debug keeps the decimal point of integral floats, e.g. `1.0`.
            Self::Float(v) => write!(f, "{:?}", v),
            Self::Str(v) => write!(f, "{}", v),
            Self::List(vs) => {
                write!(f, "[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for HyperParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for HyperParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for HyperParamValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for HyperParamValue {
    /// Values beyond `i64::MAX` saturate.
    fn from(v: usize) -> Self {
        Self::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for HyperParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for HyperParamValue {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<&str> for HyperParamValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for HyperParamValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<HyperParamValue>> From<Vec<T>> for HyperParamValue {
    fn from(vs: Vec<T>) -> Self {
        Self::List(vs.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::HyperParamValue;

    #[test]
    fn test_display() {
        assert_eq!(HyperParamValue::from(true).to_string(), "true");
        assert_eq!(HyperParamValue::from(-3).to_string(), "-3");
        assert_eq!(HyperParamValue::from(0.99).to_string(), "0.99");
        assert_eq!(HyperParamValue::from(1.0).to_string(), "1.0");
        assert_eq!(HyperParamValue::from("relu").to_string(), "relu");
        assert_eq!(HyperParamValue::from(vec![64, 32]).to_string(), "[64, 32]");
    }

    #[test]
    fn test_from_usize_saturates() {
        assert_eq!(HyperParamValue::from(7usize), HyperParamValue::Int(7));
        assert_eq!(HyperParamValue::from(usize::MAX), HyperParamValue::Int(i64::MAX));
    }

    #[test]
    fn test_deserialize_untagged() {
        let v: Vec<HyperParamValue> =
            serde_yaml::from_str("[true, 3, 0.5, adam, [1, 2]]").unwrap();
        assert_eq!(
            v,
            vec![
                HyperParamValue::Bool(true),
                HyperParamValue::Int(3),
                HyperParamValue::Float(0.5),
                HyperParamValue::Str("adam".to_string()),
                HyperParamValue::List(vec![HyperParamValue::Int(1), HyperParamValue::Int(2)]),
            ]
        );
    }
}
