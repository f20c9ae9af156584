pub mod config;
pub mod db;
pub mod format;
pub mod home;
pub mod model;
pub mod render;
pub mod store;
pub mod web;
