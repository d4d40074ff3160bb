pub mod computer;
pub mod contact;
pub mod paddle;
pub mod scoring;
pub mod serve;

pub use computer::*;
pub use contact::*;
pub use paddle::*;
pub use scoring::*;
pub use serve::*;
