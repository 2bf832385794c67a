#![warn(clippy::all, rust_2018_idioms)]

pub use app::App;

pub const APP_NAME: &str = "Netlens";

mod app;
mod data;
mod operation;
mod panels;
mod utils;
