//! Regression test parameters and operations

use crate::fixtures::mask_to_ascii;
use regionmap_core::{BinaryMask, LabelGrid};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results and record failures (default)
    #[default]
    Compare,
    /// Compare, and also print the grids under test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "label")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `expected` and `actual` differ by at most `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two masks for exact equality
    pub fn compare_masks(&mut self, expected: &BinaryMask, actual: &BinaryMask) -> bool {
        self.index += 1;

        if self.display() {
            eprintln!("index {} mask:\n{}", self.index, mask_to_ascii(actual));
        }

        if expected.dimensions() != actual.dimensions() {
            let msg = format!(
                "Failure in {}_reg: mask comparison for index {} - dimension mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.dimensions(),
                actual.dimensions()
            );
            self.fail(msg);
            return false;
        }

        let first_diff = (0..expected.height())
            .flat_map(|y| (0..expected.width()).map(move |x| (x, y)))
            .find(|&(x, y)| expected.get_unchecked(x, y) != actual.get_unchecked(x, y));

        if let Some((x, y)) = first_diff {
            let msg = format!(
                "Failure in {}_reg: mask comparison for index {} - cell mismatch at ({}, {})",
                self.test_name, self.index, x, y
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Compare two label grids for exact equality
    pub fn compare_labels(&mut self, expected: &LabelGrid, actual: &LabelGrid) -> bool {
        self.index += 1;

        if self.display() {
            eprintln!("index {} labels:", self.index);
            for row in actual.rows() {
                eprintln!("  {:?}", row);
            }
        }

        if expected.dimensions() != actual.dimensions() {
            let msg = format!(
                "Failure in {}_reg: label comparison for index {} - dimension mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.dimensions(),
                actual.dimensions()
            );
            self.fail(msg);
            return false;
        }

        let first_diff = expected
            .as_slice()
            .iter()
            .zip(actual.as_slice())
            .position(|(a, b)| a != b);

        if let Some(pos) = first_diff {
            let w = expected.width().max(1) as usize;
            let msg = format!(
                "Failure in {}_reg: label comparison for index {} - label mismatch at ({}, {}): {} vs {}",
                self.test_name,
                self.index,
                pos % w,
                pos / w,
                expected.as_slice()[pos],
                actual.as_slice()[pos]
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Compare two strings
    ///
    /// On mismatch the first differing line is reported.
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if self.display() {
            eprintln!("index {} text:\n{}", self.index, actual);
        }

        if expected == actual {
            return true;
        }

        let line = expected
            .lines()
            .zip(actual.lines())
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| expected.lines().count().min(actual.lines().count()));
        let msg = format!(
            "Failure in {}_reg: string comparison for index {} - first difference on line {}\n\
             expected: {:?}\n\
             actual:   {:?}",
            self.test_name,
            self.index,
            line + 1,
            expected.lines().nth(line),
            actual.lines().nth(line)
        );
        self.fail(msg);
        false
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_env() {
        let mode = RegTestMode::from_env();
        assert!(matches!(mode, RegTestMode::Compare | RegTestMode::Display));
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_masks() {
        let mut rp = RegParams::new("test");
        let a = BinaryMask::from_fn(3, 3, |x, y| x == y);
        let b = BinaryMask::from_fn(3, 3, |x, y| x == y && x != 2);
        assert!(rp.compare_masks(&a, &a.clone()));
        assert!(!rp.compare_masks(&a, &b));
        assert!(rp.failures()[0].contains("(2, 2)"));
        assert!(!rp.compare_masks(&a, &BinaryMask::new(2, 3)));
    }

    #[test]
    fn test_compare_labels() {
        let mut rp = RegParams::new("test");
        let a = LabelGrid::from_rows(&[[1, 0], [0, 2]]).unwrap();
        let b = LabelGrid::from_rows(&[[1, 0], [0, 3]]).unwrap();
        assert!(rp.compare_labels(&a, &a.clone()));
        assert!(!rp.compare_labels(&a, &b));
        assert!(rp.failures()[0].contains("(1, 1)"));
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_strings("a\nb", "a\nb"));
        assert!(!rp.compare_strings("a\nb", "a\nc"));
        assert!(rp.failures()[0].contains("line 2"));
    }
}
