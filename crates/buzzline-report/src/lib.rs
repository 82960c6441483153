mod process;
mod report;
mod sample;

pub use process::ProcessInfo;
pub use report::{emit_report, Report, ITEM_COUNT, ITEM_RANGE};
pub use sample::{random_number, random_word, WORDS};
