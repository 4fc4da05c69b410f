pub mod social;
pub mod token_service;

pub use social::SocialAuthService;
pub use token_service::TokenService;
