use crate::splitter::SpecGroup;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Failed to serialize matrix: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write matrix: {0}")]
    Write(#[from] std::io::Error),
}

/// GitHub Actions job matrix: `{"include": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    pub include: Vec<SpecGroup>,
}

impl Matrix {
    pub fn new(include: Vec<SpecGroup>) -> Self {
        Self { include }
    }

    /// Render as JSON, single-line unless `pretty` is set
    pub fn to_json(&self, pretty: bool) -> Result<String, MatrixError> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    /// Write the rendered matrix and a trailing newline to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, pretty: bool) -> Result<(), MatrixError> {
        let text = self.to_json(pretty)?;
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}

impl From<Vec<SpecGroup>> for Matrix {
    fn from(include: Vec<SpecGroup>) -> Self {
        Self::new(include)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceInfo;

    fn sample() -> Matrix {
        let device = DeviceInfo::default();
        Matrix::new(vec![
            SpecGroup::new(1, "path/a.e2e.ts path/b.e2e.ts".to_string(), &device),
            SpecGroup::new(2, "path/c.e2e.ts".to_string(), &device),
        ])
    }

    #[test]
    fn test_compact_output_shape() {
        let device = DeviceInfo::default();
        let matrix = Matrix::new(vec![SpecGroup::new(
            1,
            "path/a.e2e.ts path/b.e2e.ts".to_string(),
            &device,
        )]);

        assert_eq!(
            matrix.to_json(false).unwrap(),
            r#"{"include":[{"runId":"1","specs":"path/a.e2e.ts path/b.e2e.ts","device":"iPhone 15","osVersion":"17.2"}]}"#
        );
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let json = sample().to_json(false).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let json = sample().to_json(true).unwrap();
        assert!(json.contains("\n  \"include\""));
    }

    #[test]
    fn test_round_trip() {
        let matrix = sample();
        let json = matrix.to_json(false).unwrap();
        let parsed: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, matrix);
    }

    #[test]
    fn test_escapes_special_characters() {
        let device = DeviceInfo::new("iPhone \"Pro\"", "17.2");
        let matrix = Matrix::new(vec![SpecGroup::new(1, String::new(), &device)]);

        let json = matrix.to_json(false).unwrap();
        assert!(json.contains(r#""device":"iPhone \"Pro\"""#));
        let parsed: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.include[0].device, "iPhone \"Pro\"");
    }

    #[test]
    fn test_write_to_appends_newline() {
        let mut out = Vec::new();
        sample().write_to(&mut out, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        assert_eq!(text.lines().count(), 1);
    }
}
