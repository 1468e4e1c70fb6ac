pub mod error;
pub mod help;
pub mod helpers;

pub use error::ErrorModal;
pub use help::HelpModal;
