mod login_state;
mod service;

pub use service::UserQueryService;
