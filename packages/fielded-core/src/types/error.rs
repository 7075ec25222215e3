/// Error type for type registration and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Type '{tag}' already registered")]
    DuplicateType { tag: String },

    #[error("Type '{tag}' not found")]
    UnknownType { tag: String },
}
