//! Repositories backing collections, their groups, item amounts and the per-user
//! group preferences.
//!
//! None of the foreign keys between these tables cascade, so deletes go through
//! [`group::GroupRepository::delete_cascade`] which removes child rows first.

pub mod collection;
pub mod group;
pub mod item_amount;
pub mod preference;

pub use collection::CollectionRepository;
pub use group::GroupRepository;
pub use item_amount::ItemAmountRepository;
pub use preference::PreferenceRepository;
