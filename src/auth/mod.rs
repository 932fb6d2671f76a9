pub mod extractors;
pub mod services;
