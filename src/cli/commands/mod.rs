pub mod discover;
pub mod init;
pub mod resolve;
