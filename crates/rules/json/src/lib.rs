mod frontend;
mod parser;

pub use frontend::{JsonFrontend, load};
