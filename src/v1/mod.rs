pub mod aws;
pub mod command;
pub mod config;
pub mod lenient;
pub mod manager;
pub mod mapper;
pub mod params;
pub mod select;
