//! # Giniround Analysis
//!
//! Oracle, conformance harness, and verification for gini rounding
//! primitives.
//!
//! ## Modules
//!
//! - **[`oracle`]** - Away-from-zero expectation and the two-convention verdict
//! - **[`harness`]** - Sequential run over fixed inputs with a pass/fail tally
//! - **[`verify`]** - Contract checks and sampled property verification
//! - **[`records`]** - Gini indicator payload parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use giniround_analysis::prelude::*;
//! use giniround_core::TiesToEven;
//!
//! let mut reporter = CollectingReporter::default();
//! let summary = Harness::new().run(&TiesToEven, &mut reporter);
//! assert_eq!(summary.failures, 0);
//!
//! assert_eq!(evaluate(42.5, 42), Verdict::Pass);
//! ```

pub mod config;
pub mod harness;
pub mod oracle;
pub mod records;
pub mod verify;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, HarnessConfig};
    pub use crate::harness::{CollectingReporter, Harness, Reporter, Summary, TestCase, DEFAULT_INPUTS};
    pub use crate::oracle::{
        assess, evaluate, is_half_case, round_half_away_from_zero, tie_candidates, Acceptance, RoundResult,
        Verdict, HALF_CASE_EPSILON,
    };
    pub use crate::records::{
        find_latest_valid_gini, parse_indicator_response, valid_history, GiniRecord, RecordsError,
    };
    pub use crate::verify::{ContractChecker, PropertyStatus, PropertyVerifier, VerificationResult};
}

pub use harness::{Harness, Reporter, Summary};
pub use oracle::{assess, evaluate, RoundResult, Verdict};
