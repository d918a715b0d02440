/// Error codes with category prefix
///
/// Categories:
/// - FLD: Folder registry errors
/// - VAL: Input validation errors
/// - STO: Persisted store errors
/// - IO: File system operations
/// - CFG: Configuration parsing
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Folder errors (FLD001-FLD099)
    /// Folder not found
    Fld001,
    /// Folder already exists
    Fld002,

    // Validation errors (VAL001-VAL099)
    /// Invalid input document or argument
    Val001,

    // Store errors (STO001-STO099)
    /// Stored collection cannot be parsed
    Sto001,

    // I/O errors (IO001-IO099)
    /// Generic I/O failure
    Io001,
    /// Permission denied
    Io002,

    // Config errors (CFG001-CFG099)
    /// Invalid config format
    Cfg001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "FLD001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Fld001 => "FLD001",
            ErrorCode::Fld002 => "FLD002",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Sto001 => "STO001",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Fld001 => "No folder with the given code exists",
            ErrorCode::Fld002 => "A folder with the given code already exists",
            ErrorCode::Val001 => "The input is not valid structured data or lacks required fields",
            ErrorCode::Sto001 => "A stored collection file could not be parsed",
            ErrorCode::Io001 => "A file system operation failed",
            ErrorCode::Io002 => "Permission denied when accessing the data directory",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Fld001 => "1. Check the folder code for typos\n2. Use 'vfm folder list' to see existing folders",
            ErrorCode::Fld002 => "1. Pick a different folder code\n2. Use 'vfm folder rename' to change the display name",
            ErrorCode::Val001 => "1. Validate the JSON document syntax\n2. Each item needs non-empty string 'w' and 'm' fields",
            ErrorCode::Sto001 => "1. Inspect the named file in the data directory\n2. Restore it from a backup or an earlier export",
            ErrorCode::Io001 => "1. Verify the path is correct\n2. Check free disk space",
            ErrorCode::Io002 => "1. Check data directory permissions\n2. Point --data-dir at a writable location",
            ErrorCode::Cfg001 => "1. Check config.toml syntax\n2. Remove the file to fall back to defaults",
            ErrorCode::Int001 => "1. Try the operation again\n2. Report the issue with VFM_LOG=debug output",
        }
    }
}
