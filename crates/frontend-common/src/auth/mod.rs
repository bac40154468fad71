pub mod context;
pub mod session_expired;

pub use context::{AuthAction, AuthContext, AuthProvider, use_auth, use_auth_user, use_is_authenticated};
