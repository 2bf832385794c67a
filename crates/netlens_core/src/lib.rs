pub mod data;
pub mod preferences;
pub mod utils;
pub mod view;
