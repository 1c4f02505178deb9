// The two binary renderers. Both take the Record read-only and return the
// finished document bytes; neither retains state across calls.

pub mod docx;
pub mod pdf;

pub use docx::render_docx;
pub use pdf::render_pdf;
