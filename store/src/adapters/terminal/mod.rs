//! Terminal adapters
//!
//! Console port implementation over the process's stdin/stdout.

pub mod stdio_console;

pub use stdio_console::StdioConsole;
