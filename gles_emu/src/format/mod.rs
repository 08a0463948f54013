/// Format module - pixel format classification and renderbuffer formats

pub mod pixel_format;
pub mod internal_format;

pub use pixel_format::*;
pub use internal_format::*;

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
