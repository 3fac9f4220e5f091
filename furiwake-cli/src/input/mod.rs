//! Input handling module

pub mod entry_reader;
pub mod glob_resolver;

pub use entry_reader::{Entry, EntryLine, EntryReader, InputFormat};
pub use glob_resolver::{resolve_inputs, InputSource};
