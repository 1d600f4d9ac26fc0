pub mod content;
pub mod detail;
pub mod footer;
pub mod header;
pub mod modals;
pub mod search_bar;
pub mod sidebar;
