//! Pure projection of monitor data into display values.
//!
//! Nothing here performs I/O or holds state; the same input always
//! renders the same view.

pub mod format;
pub mod text;
pub mod view;

pub use format::*;
pub use text::render_text;
pub use view::*;
