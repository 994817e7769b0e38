pub mod app;
pub mod check;
pub mod header;
pub mod pack;
