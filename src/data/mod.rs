pub mod catalog;
pub mod zones;
