pub mod queries;
pub mod sync;
pub mod validate;

pub use queries::*;
pub use sync::*;
pub use validate::*;
