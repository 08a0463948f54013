/// Utility containers

pub mod handle_table;

pub use handle_table::HandleTable;
