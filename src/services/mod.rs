// Service exports
pub mod appwrite;
pub mod store;

pub use appwrite::{AppwriteClient, AppwriteCollections, AppwriteError};
pub use store::ProfileStore;
