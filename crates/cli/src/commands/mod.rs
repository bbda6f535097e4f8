pub mod extract;
pub mod list;
pub mod manifest;

pub use extract::*;
pub use list::*;
pub use manifest::*;
