mod navigation;
mod topics;

pub use navigation::{HelpModalState, HelpSection};
pub use topics::HelpModal;
