pub mod errors;

pub use errors::{InstallError, InstallerResult};
