pub mod error;
pub mod locale;
pub mod process;
pub mod render;
pub mod wire;

// Re-export commonly used types
pub use error::CoreError;
pub use locale::{Labels, Locale};
pub use process::process_data;
pub use render::{OutputKind, RenderedOutput};
pub use wire::{ProcessRequest, ProcessResponse, PROCESS_PATH};
