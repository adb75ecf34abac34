//! 原料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原料庫存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// 原料ID
    pub id: String,

    /// 原料名稱
    pub name: String,

    /// 單位（g、ml、un...）
    pub unit: String,

    /// 分類（採購清單依此排序）
    pub category: String,

    /// 現有庫存
    pub current_stock: Decimal,

    /// 最低庫存
    pub min_stock: Decimal,
}

impl Ingredient {
    /// 創建新的原料記錄
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            category: category.into(),
            current_stock: Decimal::ZERO,
            min_stock: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置現有庫存
    pub fn with_stock(mut self, current_stock: Decimal) -> Self {
        self.current_stock = current_stock;
        self
    }

    /// 建構器模式：設置最低庫存
    pub fn with_min_stock(mut self, min_stock: Decimal) -> Self {
        self.min_stock = min_stock;
        self
    }

    /// 檢查庫存是否已達最低庫存（含等於）
    ///
    /// 庫存與最低庫存皆為 0 時不標記
    pub fn is_low_stock(&self) -> bool {
        if self.current_stock.is_zero() && self.min_stock.is_zero() {
            return false;
        }
        self.current_stock <= self.min_stock
    }

    /// 需要採購的數量（不足時為正，否則為 0）
    pub fn shortfall(&self, required: Decimal) -> Decimal {
        (required - self.current_stock).max(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_ingredient() {
        let ingredient = Ingredient::new("FARINHA", "Farinha de trigo", "g", "Secos")
            .with_stock(Decimal::from(2000))
            .with_min_stock(Decimal::from(500));

        assert_eq!(ingredient.id, "FARINHA");
        assert_eq!(ingredient.unit, "g");
        assert!(!ingredient.is_low_stock());
    }

    #[test]
    fn test_low_stock_boundary() {
        let at_minimum = Ingredient::new("OVO", "Ovo", "un", "Frescos")
            .with_stock(Decimal::from(12))
            .with_min_stock(Decimal::from(12));
        let untracked = Ingredient::new("LEITE", "Leite", "ml", "Frescos");
        let oversold = Ingredient::new("CREME", "Creme de leite", "ml", "Frescos")
            .with_stock(Decimal::from(-5));
        let below = Ingredient::new("MANTEIGA", "Manteiga", "g", "Frescos")
            .with_stock(Decimal::from(100))
            .with_min_stock(Decimal::from(250));

        assert!(at_minimum.is_low_stock());
        assert!(below.is_low_stock());
        assert!(oversold.is_low_stock());
        // 庫存 0、最低庫存 0：不標記
        assert!(!untracked.is_low_stock());
    }

    #[test]
    fn test_shortfall() {
        let ingredient = Ingredient::new("ACUCAR", "Açúcar", "g", "Secos")
            .with_stock(Decimal::from(300));

        assert_eq!(ingredient.shortfall(Decimal::from(1000)), Decimal::from(700));
        assert_eq!(ingredient.shortfall(Decimal::from(100)), Decimal::ZERO);
    }
}
