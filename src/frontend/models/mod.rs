pub mod page;
pub mod selected_file;
