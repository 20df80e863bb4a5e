//! Declaration and resolution of hyper-parameters.
use super::{HyperParamOverrides, HyperParamValue};
use crate::error::HearthError;
use anyhow::Result;
use std::convert::TryFrom;

/// Declared hyper-parameters of an agent, in declaration order.
///
/// Each entry holds the parameter name and an optional default value.
/// `None` means the caller must supply the parameter.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct HyperParamSpec {
    params: Vec<(String, Option<HyperParamValue>)>,
}

impl HyperParamSpec {
    /// Declares a parameter with a default value.
    ///
    /// Redeclaring a name replaces the previous declaration in place.
    pub fn with_default(self, name: impl Into<String>, default: impl Into<HyperParamValue>) -> Self {
        self.declare(name.into(), Some(default.into()))
    }

    /// Declares a parameter without default value.
    pub fn required(self, name: impl Into<String>) -> Self {
        self.declare(name.into(), None)
    }

    fn declare(mut self, name: String, default: Option<HyperParamValue>) -> Self {
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = default,
            None => self.params.push((name, default)),
        }
        self
    }

    /// Returns `true` if a parameter with the given name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|(n, _)| n == name)
    }

    /// Returns the number of declared parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if no parameter is declared.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Resolves the declared parameters against `overrides`.
    pub fn resolve(&self, overrides: &HyperParamOverrides) -> Result<HyperParams> {
        if let Some(name) = overrides.names().find(|name| !self.contains(name)) {
            return Err(HearthError::UnknownHyperParameter(name.to_string()).into());
        }

        let mut values = Vec::with_capacity(self.params.len());
        for (name, default) in self.params.iter() {
            let value = match (overrides.get(name), default) {
                (Some(v), _) => v.clone(),
                (None, Some(v)) => v.clone(),
                (None, None) => {
                    return Err(HearthError::MissingHyperParameter(name.clone()).into());
                }
            };
            values.push((name.clone(), value));
        }

        Ok(HyperParams { values })
    }
}

/// Resolved hyper-parameters, in declaration order.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct HyperParams {
    values: Vec<(String, HyperParamValue)>,
}

impl HyperParams {
    /// Returns the value of a parameter.
    pub fn get(&self, name: &str) -> Result<&HyperParamValue> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
            .ok_or_else(|| HearthError::MissingHyperParameter(name.to_string()).into())
    }

    /// Returns `true` if a parameter with the given name was resolved.
    pub fn contains(&self, name: &str) -> bool {
        self.values.iter().any(|(n, _)| n == name)
    }

    /// Returns a non-negative integer parameter.
    pub fn get_usize(&self, name: &str) -> Result<usize> {
        match self.get(name)? {
            HyperParamValue::Int(v) => {
                usize::try_from(*v).map_err(|_| invalid(name, format!("{} is negative", v)))
            }
            v => Err(mismatch(name, "int", v)),
        }
    }

    /// Returns an integer parameter.
    pub fn get_i64(&self, name: &str) -> Result<i64> {
        match self.get(name)? {
            HyperParamValue::Int(v) => Ok(*v),
            v => Err(mismatch(name, "int", v)),
        }
    }

    /// Returns a floating-point parameter. Integers are widened.
    pub fn get_f64(&self, name: &str) -> Result<f64> {
        match self.get(name)? {
            HyperParamValue::Float(v) => Ok(*v),
            HyperParamValue::Int(v) => Ok(*v as f64),
            v => Err(mismatch(name, "float", v)),
        }
    }

    /// Returns a boolean parameter.
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        match self.get(name)? {
            HyperParamValue::Bool(v) => Ok(*v),
            v => Err(mismatch(name, "bool", v)),
        }
    }

    /// Returns a string parameter.
    pub fn get_str(&self, name: &str) -> Result<&str> {
        match self.get(name)? {
            HyperParamValue::Str(v) => Ok(v.as_str()),
            v => Err(mismatch(name, "string", v)),
        }
    }

    /// Returns an iterator over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HyperParamValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there is no parameter.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a human-readable report with one `name=value` line per parameter.
    pub fn report(&self) -> String {
        let mut report = String::from("Parameter values:");
        for (name, value) in self.iter() {
            report.push_str(&format!("\n{}={}", name, value));
        }
        report
    }
}

fn invalid(name: &str, reason: String) -> anyhow::Error {
    HearthError::InvalidHyperParameter {
        name: name.to_string(),
        reason,
    }
    .into()
}

fn mismatch(name: &str, expected: &str, value: &HyperParamValue) -> anyhow::Error {
    invalid(
        name,
        format!("expected {}, found {} {}", expected, value.type_name(), value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(err: &anyhow::Error) -> &HearthError {
        err.downcast_ref::<HearthError>().unwrap()
    }

    #[test]
    fn test_override_wins_over_default() -> Result<()> {
        let spec = HyperParamSpec::default()
            .with_default("gamma", 0.99)
            .with_default("epsilon", 0.1);
        let overrides = HyperParamOverrides::default().set("gamma", 0.5);
        let params = spec.resolve(&overrides)?;

        assert_eq!(params.get_f64("gamma")?, 0.5);
        assert_eq!(params.get_f64("epsilon")?, 0.1);
        Ok(())
    }

    #[test]
    fn test_override_satisfies_required() -> Result<()> {
        let spec = HyperParamSpec::default().required("alpha");
        let overrides = HyperParamOverrides::default().set("alpha", 0.3);
        assert_eq!(spec.resolve(&overrides)?.get_f64("alpha")?, 0.3);
        Ok(())
    }

    #[test]
    fn test_missing_without_default() {
        let spec = HyperParamSpec::default()
            .with_default("gamma", 0.99)
            .required("alpha");
        let err = spec.resolve(&HyperParamOverrides::default()).unwrap_err();

        assert_eq!(
            kind(&err),
            &HearthError::MissingHyperParameter("alpha".to_string())
        );
        assert!(err.to_string().contains("no default value was provided"));
    }

    #[test]
    fn test_falsy_defaults_are_valid() -> Result<()> {
        let spec = HyperParamSpec::default()
            .with_default("buffer_size", 0)
            .with_default("double_q", false)
            .with_default("name", "");
        let params = spec.resolve(&HyperParamOverrides::default())?;

        assert_eq!(params.get_usize("buffer_size")?, 0);
        assert!(!params.get_bool("double_q")?);
        assert_eq!(params.get_str("name")?, "");
        Ok(())
    }

    #[test]
    fn test_unknown_override() {
        let spec = HyperParamSpec::default().with_default("gamma", 0.99);
        let overrides = HyperParamOverrides::default().set("gama", 0.9);
        let err = spec.resolve(&overrides).unwrap_err();

        assert_eq!(
            kind(&err),
            &HearthError::UnknownHyperParameter("gama".to_string())
        );
    }

    #[test]
    fn test_redeclare_replaces_default() -> Result<()> {
        let spec = HyperParamSpec::default()
            .with_default("lr", 0.1)
            .required("batch_size")
            .with_default("lr", 0.01);
        assert_eq!(spec.len(), 2);

        let overrides = HyperParamOverrides::default().set("batch_size", 32);
        let params = spec.resolve(&overrides)?;
        let names: Vec<_> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["lr", "batch_size"]);
        assert_eq!(params.get_f64("lr")?, 0.01);
        Ok(())
    }

    #[test]
    fn test_typed_accessors() -> Result<()> {
        let spec = HyperParamSpec::default()
            .with_default("n", -1)
            .with_default("lr", 3)
            .with_default("optimizer", "adam");
        let params = spec.resolve(&HyperParamOverrides::default())?;

        assert_eq!(params.get_i64("n")?, -1);
        assert!(matches!(
            kind(&params.get_usize("n").unwrap_err()),
            HearthError::InvalidHyperParameter { .. }
        ));
        assert_eq!(params.get_f64("lr")?, 3.0);
        assert!(matches!(
            kind(&params.get_bool("optimizer").unwrap_err()),
            HearthError::InvalidHyperParameter { .. }
        ));
        assert_eq!(
            kind(&params.get("missing").unwrap_err()),
            &HearthError::MissingHyperParameter("missing".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_report() -> Result<()> {
        let spec = HyperParamSpec::default()
            .with_default("gamma", 0.99)
            .with_default("buffer_size", 2)
            .with_default("layers", vec![64, 64]);
        let params = spec.resolve(&HyperParamOverrides::default())?;

        assert_eq!(
            params.report(),
            "Parameter values:\ngamma=0.99\nbuffer_size=2\nlayers=[64, 64]"
        );
        Ok(())
    }
}
