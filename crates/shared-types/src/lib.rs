pub mod access;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod journal;
pub mod manuscript;
pub mod role;
pub mod session;
pub mod upload;
pub mod user;
pub mod wire;

pub use access::*;
pub use config::*;
pub use content::*;
pub use dashboard::*;
pub use envelope::*;
pub use error::*;
pub use journal::*;
pub use manuscript::*;
pub use role::*;
pub use session::*;
pub use upload::*;
pub use user::*;
