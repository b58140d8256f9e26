pub mod form;
pub mod panels;
