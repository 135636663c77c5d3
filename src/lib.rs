pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod storage;
