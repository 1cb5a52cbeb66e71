pub mod error;
pub mod property_service;
pub mod settings_service;
