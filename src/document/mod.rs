pub mod component;
pub mod condition;
pub mod definition;

pub use component::*;
pub use condition::*;
pub use definition::*;
