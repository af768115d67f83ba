pub mod confirm;
pub mod format;
pub mod selection;
pub mod table;
pub mod upload;
pub mod validate;
