//! Caller-supplied hyper-parameter values.
use super::HyperParamValue;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Hyper-parameter values supplied by the caller, overriding declared defaults.
///
/// Serialized as a plain mapping, e.g.
///
/// ```yaml
/// gamma: 0.99
/// buffer_size: 10000
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
#[serde(transparent)]
pub struct HyperParamOverrides(BTreeMap<String, HyperParamValue>);

impl HyperParamOverrides {
    /// Sets the value of a parameter.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<HyperParamValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a parameter, if supplied.
    pub fn get(&self, name: &str) -> Option<&HyperParamValue> {
        self.0.get(name)
    }

    /// Returns the names of the supplied parameters.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of supplied parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameter is supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Constructs [`HyperParamOverrides`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`HyperParamOverrides`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

impl<K, V> std::iter::FromIterator<(K, V)> for HyperParamOverrides
where
    K: Into<String>,
    V: Into<HyperParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
