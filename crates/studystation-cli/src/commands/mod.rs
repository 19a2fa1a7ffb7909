pub mod config;
pub mod dashboard;
pub mod exam;
pub mod goal;
pub mod remedy;
pub mod task;
pub mod timer;
