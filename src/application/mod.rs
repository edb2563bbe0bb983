pub mod builder;
pub mod dto;
pub mod errors;
pub mod ports;
pub mod sanitizer;
pub mod use_cases;
