pub mod errors;
mod traits;
mod types;

pub use traits::*;
pub use types::*;
