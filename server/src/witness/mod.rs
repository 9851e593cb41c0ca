pub(crate) mod entity_ref;
pub(crate) mod witness;

pub use entity_ref::{EntityRef, EntityRefFlags};
pub use witness::Witness;
