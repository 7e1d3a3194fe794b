/// Connection-string domain layer: parsing, format tokens, rendering, batches.
pub mod batch;
pub mod descriptor;
pub mod errors;
pub mod format;
pub mod render;

pub use batch::{Batch, LineKind, RenderedLine, render_batch};
pub use descriptor::ConnectionDescriptor;
pub use errors::DsnError;
pub use format::{FormatToken, KNOWN_FORMATS};
pub use render::{AliasSpec, render};
