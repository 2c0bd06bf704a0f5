//! 성장 시스템: 강화 (rank upgrade) + 선수 가치 평가

pub mod upgrade;
pub mod valuation;

pub use upgrade::*;
pub use valuation::*;
