pub mod create_ldda_idx;
pub mod create_table;
