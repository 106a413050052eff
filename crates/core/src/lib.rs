//! Representation value model for iotcon
//!
//! This crate defines the typed document used to describe IoT resource state:
//!
//! - [`Value`]: one typed datum (Int, Bool, Double, String, Null, List,
//!   Representation)
//! - [`List`]: an ordered, kind-homogeneous sequence of values, up to three
//!   dimensions deep
//! - [`Representation`]: a reference-counted tree node carrying a URI,
//!   resource types, interfaces, attributes and children
//!
//! ## Examples
//!
//! ```
//! use iotcon_core::{List, Representation, Value};
//!
//! let light = Representation::new();
//! light.set_uri("/a/light").unwrap();
//! light.append_resource_type("core.light").unwrap();
//! light.set_bool("power", true).unwrap();
//! light.set_list("levels", List::from(vec![1i64, 2, 3])).unwrap();
//!
//! assert_eq!(light.get("power").unwrap(), Value::Bool(true));
//! assert_eq!(light.keys(), vec!["power", "levels"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod list;
pub mod representation;
pub mod value;

pub use error::{Error, Result};
pub use list::{List, MAX_LIST_DIMENSION};
pub use representation::Representation;
pub use value::{Value, ValueKind};
