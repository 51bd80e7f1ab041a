mod assistant;
mod canvas;
mod files;
mod note;

pub use assistant::*;
pub use canvas::*;
pub use files::*;
pub use note::*;
