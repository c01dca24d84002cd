pub mod add;
pub mod backup;
pub mod calc;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod onboard;
pub mod review;
pub mod show;
