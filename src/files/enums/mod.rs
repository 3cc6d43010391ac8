pub mod file_status;
