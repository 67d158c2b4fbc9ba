mod request;
mod window;

pub use request::*;
pub use window::*;
