//! Hyper-parameters of agents.
//!
//! An agent declares the hyper-parameters it recognizes in a
//! [`HyperParamSpec`], each with an optional default value. At construction
//! the declaration is resolved against caller-supplied
//! [`HyperParamOverrides`] into [`HyperParams`]:
//!
//! * an override, if supplied, wins;
//! * otherwise a declared default is used, whatever its value (`0`, `false`
//!   and `""` are valid defaults);
//! * otherwise resolution fails with
//!   [`HearthError::MissingHyperParameter`](crate::error::HearthError::MissingHyperParameter).
//!
//! # Examples
//!
//! ```rust
//! use hearth_core::hyper_params::{HyperParamOverrides, HyperParamSpec};
//!
//! let spec = HyperParamSpec::default()
//!     .with_default("gamma", 0.99)
//!     .with_default("buffer_size", 1000)
//!     .required("alpha");
//! let overrides = HyperParamOverrides::default().set("alpha", 0.1);
//!
//! let params = spec.resolve(&overrides).unwrap();
//! assert_eq!(params.get_f64("alpha").unwrap(), 0.1);
//! assert_eq!(params.get_usize("buffer_size").unwrap(), 1000);
//! ```
mod overrides;
mod spec;
mod value;
pub use overrides::HyperParamOverrides;
pub use spec::{HyperParamSpec, HyperParams};
pub use value::HyperParamValue;
