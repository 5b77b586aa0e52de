pub mod pages;
pub mod reset;
