//! Variable module - typed template variables
//!
//! A [`Variable`] is a single template value with a runtime type drawn from a
//! closed set (string, number, boolean, array, object, null). A
//! [`VariableCollection`] stores named variables and resolves dotted paths
//! (`user.address.city`) through nested objects.
//!
//! ## Validation
//!
//! - **Typed constructors** (`Variable::new_string`, ...) enforce the limits in
//!   [`crate::config::consts::variable`]
//! - **Shape inference** (`Variable::from_raw`, deserialization) never validates;
//!   call [`Variable::validate`] when strict checking is needed
//!
//! ## Nested objects
//!
//! Object payloads are owned values. Lookups return snapshots; writes go
//! through `&mut VariableCollection` and are visible to later lookups only.

mod collection;
mod error;
mod kind;
mod raw;
mod value;

pub use collection::VariableCollection;
pub use error::VariableError;
pub use kind::VariableKind;
pub use value::Variable;
