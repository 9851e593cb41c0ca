use crate::{
    bundle::Bundle,
    schema::{
        error::SchemaError,
        value::{DataType, Value},
    },
    types::MethodId,
};

/// Which role is allowed to receive a remotely invoked method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MethodExposure {
    Cell,
    Base,
    Client,
}

/// Describes one remotely invokable method of a schema module.
///
/// Immutable after schema load; owned by the schema registry for the process
/// lifetime and shared by every call addressing it.
#[derive(Debug)]
pub struct MethodDescription {
    name: String,
    id: MethodId,
    exposure: MethodExposure,
    params: Vec<DataType>,
}

impl MethodDescription {
    pub fn new(name: &str, id: MethodId, exposure: MethodExposure, params: Vec<DataType>) -> Self {
        Self {
            name: name.to_string(),
            id,
            exposure,
            params,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> MethodId {
        self.id
    }

    pub fn exposure(&self) -> MethodExposure {
        self.exposure
    }

    pub fn params(&self) -> &[DataType] {
        &self.params
    }

    /// Validates an argument list against the parameter schema.
    pub fn check_args(&self, args: &[Value]) -> Result<(), SchemaError> {
        if args.len() != self.params.len() {
            return Err(SchemaError::ArgumentCountMismatch {
                method: self.name.clone(),
                expected: self.params.len(),
                actual: args.len(),
            });
        }

        for (index, (param, arg)) in self.params.iter().zip(args.iter()).enumerate() {
            if arg.data_type() != *param {
                return Err(SchemaError::ArgumentTypeMismatch {
                    method: self.name.clone(),
                    index,
                    expected: param.name(),
                    actual: arg.data_type().name(),
                });
            }
        }

        Ok(())
    }

    /// Encodes an argument list into `bundle`, in parameter order.
    ///
    /// Arguments are expected to have passed [`check_args`](Self::check_args)
    /// already.
    pub fn write_args(&self, args: &[Value], bundle: &mut Bundle) {
        for arg in args {
            arg.write(bundle);
        }
    }
}
