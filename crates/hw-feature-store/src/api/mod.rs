//! Resource APIs: one type per REST resource, each owning a [`Session`].
//!
//! [`Session`]: crate::Session

mod feature_group;
mod feature_store;
mod project;

pub use feature_group::FeatureGroupApi;
pub use feature_store::FeatureStoreApi;
pub use project::ProjectApi;
