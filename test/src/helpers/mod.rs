pub mod test_entity;
pub mod test_script;

pub use test_entity::TestEntity;
pub use test_network::{TestChannels, TestNetwork};
pub use test_registry::TestRegistry;
pub use test_schema::{avatar_module, inventory_component_module};
pub use test_script::{MapFallback, NoFallback};
