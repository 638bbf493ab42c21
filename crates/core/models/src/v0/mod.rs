mod events;
mod responses;

pub use events::*;
pub use responses::*;
