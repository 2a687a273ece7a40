pub mod canvas;
pub mod street;
