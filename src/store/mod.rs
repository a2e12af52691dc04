pub mod documents;
pub mod local;

pub use documents::DocumentStore;
pub use local::LocalStorage;
