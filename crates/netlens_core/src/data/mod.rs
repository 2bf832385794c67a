pub mod cookies;
pub mod http;
pub mod resource;
