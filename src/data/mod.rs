mod head;
mod nav;
mod route;

pub use head::*;
pub use nav::*;
pub use route::*;
