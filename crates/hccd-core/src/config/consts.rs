//! Fixed names and values shared across the pipeline

/// Project configuration file looked up next to the card template
pub const CONFIG_FILE_NAME: &str = "hccd.toml";

/// Suffix appended to the template base name for the generated sheet
pub const GENERATED_SUFFIX: &str = "-GENERATED";

/// Column holding the per-row repeat count when copies are enabled
pub const COPIES_COLUMN: &str = "_copies";

/// Text substituted for template fields that the row does not define
pub const NOT_FOUND_TEXT: &str = "[NOT FOUND]";

/// Grid defaults used when `hccd.toml` omits `[grid]`
pub mod grid {
    pub const DEFAULT_ROWS: u32 = 3;
    pub const DEFAULT_COLS: u32 = 3;
}
