pub mod rest_sender;
