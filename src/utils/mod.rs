pub mod form;
pub mod token;
