use farcall_shared::Value;

/// Generic object-attribute fallback of the embedding script runtime.
///
/// Consulted only after schema lookup misses; a hit here produces a plain
/// value instead of a remotely invokable method.
pub trait GenericAttributes {
    fn generic_get_attribute(&self, name: &str) -> Option<Value>;
}
