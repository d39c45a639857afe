//! Result output module

pub mod writer;

pub use writer::OutputWriter;
