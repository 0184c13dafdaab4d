// Terminal UI using Ratatui

pub mod components;
pub mod constants;
pub mod detail;
pub mod events;
pub mod grid;
pub mod help;
pub mod platform;
pub mod quit_modal;
pub mod state;
pub mod video_modal;

pub use detail::DetailView;
pub use events::{run_ui, run_ui_with_options};
pub use grid::GridView;
pub use help::{HelpModal, HelpModalState, HelpSection};
pub use quit_modal::QuitModal;
pub use state::AppState;
pub use video_modal::VideoModal;
