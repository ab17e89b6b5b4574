pub mod hash;
pub mod path;
pub mod process;
pub mod summary;
