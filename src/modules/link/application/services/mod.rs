mod create_link_service;
mod get_links_service;

pub use create_link_service::CreateLinkService;
pub use get_links_service::GetLinksService;
