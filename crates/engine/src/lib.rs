pub mod config;
pub mod export;
pub mod extractor;
pub mod parser;
pub mod pipeline;
pub mod routes;
pub mod validator;
