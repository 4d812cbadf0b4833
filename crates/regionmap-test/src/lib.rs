//! regionmap-test - Regression test framework for regionmap
//!
//! This crate provides a small regression harness in the style of
//! Leptonica's `regutils.c`, plus grid fixtures shared by the test suites:
//!
//! - [`RegParams`] - indexed comparisons that collect failures and report
//!   them together at [`RegParams::cleanup`]
//! - [`mask_from_ascii`] - build a [`BinaryMask`](regionmap_core::BinaryMask)
//!   from a picture such as `"#.#"`
//! - [`random_mask`] - seeded random masks for property checks
//! - [`reference_components`] - union-find labeling used as an oracle
//! - [`init_test_logging`] - route `log` output to stderr
//!
//! # Usage
//!
//! ```ignore
//! use regionmap_test::RegParams;
//!
//! let mut rp = RegParams::new("label");
//! rp.compare_values(9.0, size as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"
//! - `RUST_LOG`: log filter for [`init_test_logging`], default `warn`

mod error;
mod fixtures;
mod logging;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{mask_from_ascii, mask_to_ascii, random_mask, reference_components};
pub use logging::init_test_logging;
pub use params::{RegParams, RegTestMode};
