pub mod calendar;
pub mod distance;
pub mod init;
pub mod root;
pub mod show;
