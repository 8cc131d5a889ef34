pub mod banner;
pub mod console;
pub mod menu;

pub use console::Console;
pub use menu::{CommandLoop, LoopState, Operation, Selection};
