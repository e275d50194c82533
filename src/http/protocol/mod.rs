pub mod header;
pub mod method;
