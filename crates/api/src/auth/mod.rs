pub mod identity;
pub mod password;

pub use identity::CallerIdentity;
pub use password::PasswordService;
