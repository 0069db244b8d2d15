mod create_link_use_case;
mod get_links_use_case;

pub use create_link_use_case::{
    CreateLinkCommand, CreateLinkCommandError, CreateLinkError, CreateLinkUseCase,
};
pub use get_links_use_case::{GetLinksError, GetLinksUseCase};
