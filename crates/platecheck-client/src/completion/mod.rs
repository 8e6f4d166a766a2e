pub mod key;
pub mod mirror;
pub mod store;
