pub mod aggregate;
pub mod form;
