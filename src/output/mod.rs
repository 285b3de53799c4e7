mod export;
mod report;
mod terminal;

pub use export::{csv_file_name, write_csv};
pub use report::{write_report, AnalysisReport};
pub use terminal::{print_analysis, print_reviews};
