//! ti-case: case file format, validation and text input parsing.

pub mod input;
pub mod schema;
pub mod validate;

pub use input::{InputError, parse_positive};
pub use schema::*;
pub use validate::{ValidationError, validate_case};

use std::path::Path;

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a case file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    Yaml,
    Json,
}

impl CaseFormat {
    /// `.json` is JSON, anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CaseFormat::Json,
            _ => CaseFormat::Yaml,
        }
    }
}

/// Deserialize without validating, for callers that patch the case first.
pub fn parse_str(content: &str, format: CaseFormat) -> CaseResult<CaseDef> {
    let case = match format {
        CaseFormat::Yaml => serde_yaml::from_str(content)?,
        CaseFormat::Json => serde_json::from_str(content)?,
    };
    Ok(case)
}

pub fn from_str(content: &str, format: CaseFormat) -> CaseResult<CaseDef> {
    let case = parse_str(content, format)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn to_string(case: &CaseDef, format: CaseFormat) -> CaseResult<String> {
    validate_case(case)?;
    let content = match format {
        CaseFormat::Yaml => serde_yaml::to_string(case)?,
        CaseFormat::Json => serde_json::to_string_pretty(case)?,
    };
    Ok(content)
}

pub fn load_case(path: &Path) -> CaseResult<CaseDef> {
    let content = std::fs::read_to_string(path)?;
    from_str(&content, CaseFormat::from_path(path))
}

pub fn save_case(path: &Path, case: &CaseDef) -> CaseResult<()> {
    let content = to_string(case, CaseFormat::from_path(path))?;
    std::fs::write(path, content)?;
    Ok(())
}
