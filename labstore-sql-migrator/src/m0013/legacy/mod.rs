pub mod drop_tables;
