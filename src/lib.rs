pub mod cache;
pub mod catalog;
pub mod coordinators;
pub mod db;
pub mod handlers;
pub mod library;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod settings;
pub mod state;
pub mod utils;
