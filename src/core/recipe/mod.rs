pub mod manifest;
pub mod model;

pub use model::{Category, Item, Recipe};
