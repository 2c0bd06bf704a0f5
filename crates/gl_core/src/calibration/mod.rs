//! Calibration: seeded batch runs for tuning `MatchConfig`.
//!
//! - `run_batch`: one match per seed in parallel, folded into a `BatchReport`
//! - `check_home_symmetry`: same pairing with sides swapped, to catch home bias

pub mod batch;
pub mod symmetry;

pub use batch::{run_batch, run_seed_range, BatchReport};
pub use symmetry::{check_home_symmetry, SymmetryReport, DEFAULT_SYMMETRY_TOLERANCE};
