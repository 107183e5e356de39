/// Written to the current working directory.
pub const OUTPUT_FILE: &str = "compaction.svg";
