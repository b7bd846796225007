pub mod event;
pub mod index_path;
