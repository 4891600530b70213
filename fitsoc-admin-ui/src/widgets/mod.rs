pub mod empty_state;
pub mod header;
pub mod loading;
pub mod record_form;
pub mod records_table;
pub mod server_status;
pub mod shell;
pub mod sidebar;
pub mod society_selector;
