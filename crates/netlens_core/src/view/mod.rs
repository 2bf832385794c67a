pub mod cookies_table;
pub mod outline;
pub mod resource_panel;
pub mod tabbed_pane;
