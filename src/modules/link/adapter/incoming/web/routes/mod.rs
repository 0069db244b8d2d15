mod create_link;
mod get_links;

pub use create_link::*;
pub use get_links::*;
