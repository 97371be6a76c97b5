mod challenge;
pub use challenge::*;
mod error;
pub use error::*;
mod item;
pub use item::*;
