mod neo_grouper;
mod report_generator;

pub use neo_grouper::NeoGrouper;
pub use report_generator::ReportGenerator;
