pub mod analyze;
pub mod batch;
pub mod helper;
pub mod init;
