mod parser;
mod types;

pub use parser::resolve_spans;
pub use types::{InlineSpan, plain_text};
