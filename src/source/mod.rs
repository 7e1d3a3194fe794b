/// I/O layer: config stores, key resolution, and dotfile appends.
pub mod dotfiles;
pub mod errors;
pub mod resolve;
pub mod store;

pub use errors::SourceError;
pub use store::{EnvStore, JsonFileStore, lookup};
