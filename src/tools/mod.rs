pub mod file;
pub mod fuzzy_json;
pub mod registry;
pub mod r#trait;
