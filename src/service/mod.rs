//! Repositories: query construction for each entity, no HTTP concerns.

mod items;
pub use items::ItemRepository;
