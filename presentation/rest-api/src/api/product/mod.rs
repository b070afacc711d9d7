pub mod dto;
pub mod error_mapper;
pub mod query_string;
pub mod routes;
