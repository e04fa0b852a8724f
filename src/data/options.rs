use serde::Deserialize;

/// Strings treated as missing unless `keep_default_na` is turned off.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reader configuration forwarded to the CSV parser.
///
/// `ReadOptions::default()` reads a plain comma-separated file with a header
/// row. Every field has a serde default, so a partial JSON object such as
/// `{"nrows": 100}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadOptions {
    /// Field separator.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Lines beginning with this byte are skipped.
    pub comment: Option<u8>,
    /// Whether the first record names the columns. Without a header,
    /// columns are named `0`, `1`, ...
    pub has_headers: bool,
    /// Records dropped from the start of the file before the header.
    pub skip_rows: usize,
    /// Upper bound on data rows read.
    pub nrows: Option<usize>,
    /// Columns to keep, in file order.
    pub usecols: Option<Vec<String>>,
    /// Extra missing-value markers.
    pub na_values: Vec<String>,
    /// Also honour [`DEFAULT_NA_VALUES`].
    pub keep_default_na: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            comment: None,
            has_headers: true,
            skip_rows: 0,
            nrows: None,
            usecols: None,
            na_values: Vec::new(),
            keep_default_na: true,
        }
    }
}

impl ReadOptions {
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }

    pub fn skip_rows(mut self, n: usize) -> Self {
        self.skip_rows = n;
        self
    }

    pub fn nrows(mut self, n: usize) -> Self {
        self.nrows = Some(n);
        self
    }

    pub fn usecols<S: Into<String>>(mut self, cols: impl IntoIterator<Item = S>) -> Self {
        self.usecols = Some(cols.into_iter().map(Into::into).collect());
        self
    }

    pub fn na_values<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.na_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn is_na(&self, field: &str) -> bool {
        (self.keep_default_na && DEFAULT_NA_VALUES.contains(&field))
            || self.na_values.iter().any(|na| na == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let opts: ReadOptions = serde_json::from_str(r#"{"nrows": 5, "usecols": ["id"]}"#).unwrap();
        assert_eq!(opts.nrows, Some(5));
        assert_eq!(opts.usecols, Some(vec!["id".to_string()]));
        assert_eq!(opts.delimiter, b',');
        assert!(opts.has_headers);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let result: Result<ReadOptions, _> = serde_json::from_str(r#"{"index_col": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_na_detection() {
        let opts = ReadOptions::default().na_values(["-999"]);
        assert!(opts.is_na(""));
        assert!(opts.is_na("NaN"));
        assert!(opts.is_na("-999"));
        assert!(!opts.is_na("0"));

        let strict = ReadOptions {
            keep_default_na: false,
            ..ReadOptions::default()
        };
        assert!(!strict.is_na("NA"));
    }
}
