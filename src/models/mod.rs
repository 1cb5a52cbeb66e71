pub mod usermodel;
