//! 配方模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 配方類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeKind {
    /// 麵糊（以每批片數計）
    Dough,
    /// 餡料（以每批重量計）
    Filling,
}

/// 每批用料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchIngredient {
    /// 原料ID
    pub ingredient_id: String,

    /// 每批用量（原料本身的單位）
    pub quantity: Decimal,
}

/// 配方
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// 配方ID
    pub id: String,

    /// 配方名稱（舊訂單以名稱比對）
    pub name: String,

    /// 配方類型
    pub kind: RecipeKind,

    /// 每批用料
    pub batch_ingredients: Vec<BatchIngredient>,

    /// 批量描述（僅供顯示）
    pub batch_yield_description: Option<String>,

    /// 每批總重量（克，僅餡料使用）
    pub batch_total_weight_grams: Option<Decimal>,

    /// 每批片數（依直徑，僅麵糊使用）
    pub disc_yield_by_diameter: BTreeMap<u32, Decimal>,
}

impl Recipe {
    /// 創建新的配方
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: RecipeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            batch_ingredients: Vec::new(),
            batch_yield_description: None,
            batch_total_weight_grams: None,
            disc_yield_by_diameter: BTreeMap::new(),
        }
    }

    /// 創建麵糊配方
    pub fn dough(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, RecipeKind::Dough)
    }

    /// 創建餡料配方
    pub fn filling(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, RecipeKind::Filling)
    }

    /// 建構器模式：添加每批用料
    pub fn with_ingredient(mut self, ingredient_id: impl Into<String>, quantity: Decimal) -> Self {
        self.batch_ingredients.push(BatchIngredient {
            ingredient_id: ingredient_id.into(),
            quantity,
        });
        self
    }

    /// 建構器模式：設置某直徑的每批片數
    pub fn with_disc_yield(mut self, diameter_cm: u32, discs: Decimal) -> Self {
        self.disc_yield_by_diameter.insert(diameter_cm, discs);
        self
    }

    /// 建構器模式：設置每批總重量
    pub fn with_batch_weight(mut self, grams: Decimal) -> Self {
        self.batch_total_weight_grams = Some(grams);
        self
    }

    /// 建構器模式：設置批量描述
    pub fn with_yield_description(mut self, description: impl Into<String>) -> Self {
        self.batch_yield_description = Some(description.into());
        self
    }

    pub fn is_dough(&self) -> bool {
        self.kind == RecipeKind::Dough
    }

    pub fn is_filling(&self) -> bool {
        self.kind == RecipeKind::Filling
    }

    /// 某直徑的每批片數，表中沒有時使用預設值
    pub fn disc_yield(&self, diameter_cm: u32, default_yield: Decimal) -> Decimal {
        self.disc_yield_by_diameter
            .get(&diameter_cm)
            .copied()
            .unwrap_or(default_yield)
    }

    /// 每批總重量，未設定時使用預設值
    pub fn batch_weight(&self, default_grams: Decimal) -> Decimal {
        self.batch_total_weight_grams.unwrap_or(default_grams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dough_recipe() {
        let recipe = Recipe::dough("M-01", "Baunilha")
            .with_ingredient("FARINHA", Decimal::from(500))
            .with_ingredient("OVO", Decimal::from(6))
            .with_disc_yield(15, Decimal::from(4))
            .with_disc_yield(20, Decimal::from(2))
            .with_yield_description("1 fornada");

        assert!(recipe.is_dough());
        assert!(!recipe.is_filling());
        assert_eq!(recipe.batch_ingredients.len(), 2);
        assert_eq!(recipe.disc_yield(20, Decimal::from(4)), Decimal::from(2));
        assert_eq!(recipe.batch_yield_description.as_deref(), Some("1 fornada"));
    }

    #[test]
    fn test_disc_yield_default() {
        let recipe = Recipe::dough("M-01", "Baunilha").with_disc_yield(15, Decimal::from(4));
        assert_eq!(recipe.disc_yield(30, Decimal::from(4)), Decimal::from(4));
    }

    #[test]
    fn test_batch_weight_default() {
        let plain = Recipe::filling("R-01", "Brigadeiro");
        let heavy = Recipe::filling("R-02", "Doce de leite").with_batch_weight(Decimal::from(900));

        assert_eq!(plain.batch_weight(Decimal::from(450)), Decimal::from(450));
        assert_eq!(heavy.batch_weight(Decimal::from(450)), Decimal::from(900));
    }
}
