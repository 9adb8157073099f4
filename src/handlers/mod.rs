/// Request handlers for habit management
/// 
/// Each operation is a plain function over `HabitStorage`; the `http`
/// module adapts them to routes and responses.

pub mod list;
pub mod create;
pub mod mark_done;
pub mod delete_all;

pub use list::*;
pub use create::*;
pub use mark_done::*;
pub use delete_all::*;
