pub mod calibrator;
pub mod config;
pub mod feedback;
pub mod pose;
