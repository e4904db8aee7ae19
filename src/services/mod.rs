pub mod authorization_service;
pub mod branch_rep_service;
pub mod directory_service;

pub use authorization_service::AuthorizationService;
pub use branch_rep_service::BranchRepService;
pub use directory_service::DirectoryService;
