mod options;
pub mod progress;
mod renderer;
pub mod session;
mod types;

pub use options::*;
pub use progress::{ProgressRecord, ProgressStore, document_key};
pub use renderer::{Bitmap, Renderer, ensure_bitmap_fits};
pub use session::{ViewerSession, ZoomDirection};
pub use types::*;
