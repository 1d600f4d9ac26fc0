pub mod catalog;
pub mod clipboard;
pub mod models;
pub mod search;
