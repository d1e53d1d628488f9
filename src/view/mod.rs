pub mod list_view;
pub mod rows;

pub use list_view::{ActionSet, ListView, TableRow};
