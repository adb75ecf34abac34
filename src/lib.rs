//! # Cakeplan
//!
//! 蛋糕店生產計劃引擎：由已確認訂單推算麵糊、餡料批數與原料採購清單

pub mod logging;

pub use cakeplan_calc::*;
pub use cakeplan_core::*;
