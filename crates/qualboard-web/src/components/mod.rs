pub mod header;
pub mod notice;
pub mod sign_in;
