//! # Cakeplan Calculation Engine
//!
//! 生產計劃計算引擎：需求彙總 → 批數換算 → 原料需求 → 採購清單

pub mod batching;
pub mod demand;
pub mod low_stock;
pub mod planner;
pub mod requirement;
pub mod shopping;
pub mod technical_sheet;

// Re-export 主要類型
pub use batching::{ceil_to_tenth, BatchResolver};
pub use demand::{DemandAggregator, DemandSummary, UnitDemand};
pub use low_stock::LowStockReporter;
pub use planner::ProductionPlanner;
pub use requirement::{IngredientRequirements, RequirementAggregator};
pub use shopping::ShoppingListBuilder;
pub use technical_sheet::{SheetLine, TechnicalSheet, TechnicalSheetRow};

use serde::Serialize;

/// 生產計劃計算結果
#[derive(Debug, Clone, Serialize)]
pub struct PlanResult {
    /// 生產計劃
    pub plan: cakeplan_core::ProductionPlan,

    /// 低庫存原料（與訂單需求無關）
    pub low_stock: Vec<cakeplan_core::Ingredient>,

    /// 警告信息（被預設值或略過處理的輸入）
    pub warnings: Vec<PlanWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl PlanResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            plan: cakeplan_core::ProductionPlan::empty(),
            low_stock: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: PlanWarning) {
        self.warnings.push(warning);
    }

    /// 依類型篩選警告
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &PlanWarning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}

/// 計劃警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanWarning {
    /// 相關對象（訂單ID、口味名稱或原料ID）
    pub subject: String,
    pub kind: WarningKind,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(
        subject: String,
        kind: WarningKind,
        message: String,
        severity: WarningSeverity,
    ) -> Self {
        Self {
            subject,
            kind,
            message,
            severity,
        }
    }

    pub fn info(subject: String, kind: WarningKind, message: String) -> Self {
        Self::new(subject, kind, message, WarningSeverity::Info)
    }

    pub fn warning(subject: String, kind: WarningKind, message: String) -> Self {
        Self::new(subject, kind, message, WarningSeverity::Warning)
    }
}

/// 警告類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    /// 尺寸無法解析，使用預設直徑
    DefaultedDiameter,
    /// 麵糊口味找不到對應配方
    UnmatchedDoughFlavor,
    /// 餡料口味找不到對應配方
    UnmatchedFillingFlavor,
    /// 配方用料不在原料目錄中
    MissingIngredient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    /// 已用預設值補上，計劃仍完整
    Info,
    /// 輸入被略過，計劃可能少算
    Warning,
}
