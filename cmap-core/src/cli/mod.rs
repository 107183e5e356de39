mod constants;
mod report;
mod run;

pub use constants::OUTPUT_FILE;
pub use report::{error_hint, print_error, print_summary};
pub use run::{Summary, render_timeline, run_timeline};
