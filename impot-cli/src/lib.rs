pub mod household_file;
pub mod logging;
pub mod report;
