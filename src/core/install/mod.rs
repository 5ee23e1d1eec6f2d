pub mod installer;
pub mod report;

pub use installer::Installer;
pub use report::{CategoryReport, InstallReport};
