pub(crate) mod error;
pub(crate) mod method;
pub(crate) mod module;
pub(crate) mod property;
pub(crate) mod registry;
pub(crate) mod value;

pub use error::SchemaError;
pub use method::{MethodDescription, MethodExposure};
pub use module::SchemaModule;
pub use property::PropertyDescription;
pub use registry::SchemaRegistry;
pub use value::{DataType, Value};
