use std::fmt;

/// Tagged cell value for pass-through columns.
///
/// Every column gets a semantic type at the ingest boundary instead of
/// carrying untyped strings through the pipeline: numbers stay numbers,
/// empty cells stay empty, everything else is text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Classify a raw CSV field.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Number(n);
        }
        CellValue::Text(raw.to_string())
    }

    /// Lowercase text values; numbers and empty cells pass through unchanged.
    pub fn lowercased(self) -> Self {
        match self {
            CellValue::Text(s) => CellValue::Text(s.to_lowercase()),
            other => other,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text content, if this cell holds text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            // trim the trailing ".0" that f64 formatting would keep for integers
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Empty => Ok(()),
        }
    }
}
