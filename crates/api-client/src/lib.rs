pub mod config;

pub mod api;

pub mod error_convert;

pub use api::HospitalApi;
