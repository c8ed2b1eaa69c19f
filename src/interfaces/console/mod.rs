//! Console terminal: stdin input and the operator menu

mod input;
mod shell;

pub use input::ConsoleInput;
pub use shell::InteractiveShell;
