pub mod buffer;

pub use buffer::TextBuffer;
