pub mod init;
pub mod list;
pub mod shell;
pub mod show;
