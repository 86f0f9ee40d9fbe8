//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the stored weather record for the given (already trimmed) id
    FetchRecord { id: String },
}
