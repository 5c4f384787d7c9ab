pub mod add_tool_shed_status;
pub mod drop_update_available;
