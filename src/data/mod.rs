pub mod compare;
pub mod table;

pub use compare::{compare_cells, numeric_key};
pub use table::{Row, TableModel};
