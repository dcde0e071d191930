pub mod collection;
pub mod genre;
pub mod manga;
pub mod pagination;

pub use collection::*;
pub use genre::*;
pub use manga::*;
pub use pagination::*;
