//! File-boundary helpers: reading district tables, writing reports.
//!
//! The scoring core never touches the file system; everything that does
//! lives here or in the command handlers.

pub mod output;

use crate::core::DistrictRow;
use crate::errors::RiskmapError;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a district indicator table from a JSON file, or from stdin when
/// `path` is `-`.
pub fn read_districts(path: &Path) -> Result<Vec<DistrictRow>, RiskmapError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| RiskmapError::io(e, path))?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|e| RiskmapError::io(e, path))?
    };

    serde_json::from_str(&raw).map_err(|e| RiskmapError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write a file, wrapping errors with path context.
pub fn write_file(path: &Path, contents: &str) -> Result<(), RiskmapError> {
    fs::write(path, contents).map_err(|e| RiskmapError::io(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_districts_parses_a_json_table() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"district": "Zomba", "flood_risk": 55.0, "latitude": -15.38}}]"#
        )
        .unwrap();

        let rows = read_districts(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].district, "Zomba");
        assert_eq!(rows[0].hazard.flood_risk, Some(55.0));
        assert_eq!(rows[0].latitude, Some(-15.38));
    }

    #[test]
    fn read_districts_reports_parse_errors_with_the_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_districts(file.path()).unwrap_err();
        assert!(matches!(err, RiskmapError::Parse { .. }));
    }

    #[test]
    fn read_districts_surfaces_missing_files_as_io_errors() {
        let err = read_districts(Path::new("/nonexistent/districts.json")).unwrap_err();
        assert!(matches!(err, RiskmapError::Io { .. }));
    }
}
