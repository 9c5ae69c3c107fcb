pub mod progress_sheet;
pub mod workspace;
