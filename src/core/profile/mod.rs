pub mod model;
pub mod store;

pub use model::{Profile, ProfileRegistry};
pub use store::ProfileStore;
