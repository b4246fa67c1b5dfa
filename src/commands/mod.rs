pub mod analyze;
pub mod batch;
pub mod channels;
mod output;
mod report;
