//! Book catalog search service: filter, sort and paginate over a read-only
//! in-memory catalog, served as `GET /api/books`.

pub mod config;
pub mod models;
pub mod routes;
pub mod services;
