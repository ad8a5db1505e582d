//! Browser service bindings

pub mod page;
pub mod phantom;

pub use page::WindowLoad;
pub use phantom::PhantomProvider;
