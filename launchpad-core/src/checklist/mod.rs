//! The checklist engine: pure functions over the field schema and stored
//! answers. No I/O here; the store and API layers feed these and persist
//! whatever needs persisting.

mod carry;
mod defaults;
mod email;
mod flatten;
mod progress;
mod versions;

pub use carry::*;
pub use defaults::*;
pub use email::*;
pub use flatten::*;
pub use progress::*;
pub use versions::*;
