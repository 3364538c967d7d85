pub mod init;
pub mod issues;
pub mod permissions;
pub mod tracker;
