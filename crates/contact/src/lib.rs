mod notice;
mod submission;
mod submit;

pub use notice::*;
pub use submission::*;
pub use submit::*;
