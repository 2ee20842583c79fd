//! Typed entity models and the pagination envelope.

pub mod character;
pub mod episode;
pub mod location;
pub mod organization;
pub mod pagination;
pub mod titan;

/// Capability shared by every entity type: a stable integer identity.
///
/// ID lookup and the generic parts of response shaping only need this.
pub trait Identified {
    fn id(&self) -> i64;
}
