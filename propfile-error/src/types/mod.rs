pub mod syntax;

// Re-export the error types so callers can use `propfile_error::SyntaxError`.
pub use syntax::*;
