pub mod book;
pub mod catalog;
pub mod query;
pub mod responses;
