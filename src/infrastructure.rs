pub mod auth;
pub mod clients;
pub mod db;
pub mod store;
pub mod utils;
