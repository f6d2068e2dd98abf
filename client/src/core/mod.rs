pub mod api;
pub mod files;
pub mod models;
pub mod pages;
pub mod routes;
