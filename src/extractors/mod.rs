//! Request extractors that reject with `AppError`.

mod json;
mod path;

pub use json::ValidJson;
pub use path::ItemId;
