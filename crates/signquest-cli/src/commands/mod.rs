pub mod catalog;
pub mod init;
pub mod play;
pub mod profile;
