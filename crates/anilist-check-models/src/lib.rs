pub mod category;
pub mod collection;
pub mod media;

pub use category::ListCategory;
pub use collection::ListCollection;
pub use media::{MediaRecord, MediaTitle};
