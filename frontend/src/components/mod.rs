pub mod alerts;
pub mod clock;
pub mod data_table;
pub mod forms;
pub mod theme;
