pub mod propertydtos;
pub mod userdtos;
