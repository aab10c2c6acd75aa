mod lines;
mod running;

pub use lines::*;
pub use running::*;
