use super::cart::{Cart, CartId, Product};
use super::errors::DomainError;

/// Mutation applied to a cart inside a single read-modify-write.
///
/// Returns `Ok(true)` when the cart changed and must be written back.
pub type CartMutation<'a> = dyn FnMut(&mut Cart) -> Result<bool, DomainError> + 'a;

pub trait CartRepository: Send + Sync + 'static {
    /// Load the cart stored under `id`, creating an empty one if it is absent.
    fn load_or_create(&self, id: &CartId) -> Result<Cart, DomainError>;

    /// Apply `mutation` to the cart under `id` while holding an exclusive lock
    /// on it, persisting the result when the mutation reports a change.
    fn update(&self, id: &CartId, mutation: &mut CartMutation<'_>) -> Result<Cart, DomainError>;
}

pub trait ProductCatalog: Send + Sync + 'static {
    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;
}
