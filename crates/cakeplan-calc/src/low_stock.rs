//! 低庫存報告

use cakeplan_core::Ingredient;

/// 低庫存報告器
///
/// 與訂單需求無關，只比較現有庫存與最低庫存
pub struct LowStockReporter;

impl LowStockReporter {
    /// 找出庫存已達最低庫存的原料（保持原料目錄順序）
    pub fn find(ingredients: &[Ingredient]) -> Vec<Ingredient> {
        let low: Vec<Ingredient> = ingredients
            .iter()
            .filter(|ingredient| ingredient.is_low_stock())
            .cloned()
            .collect();

        if !low.is_empty() {
            tracing::info!("低庫存原料 {} 種", low.len());
        }

        low
    }
}
