//! 生產計劃模型（計算結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Ingredient;

/// 麵糊：單一直徑的片數與批數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiameterBatches {
    /// 直徑（cm）
    pub diameter_cm: u32,

    /// 需要的片數
    pub discs_needed: Decimal,

    /// 使用的每批片數
    pub yield_per_batch: Decimal,

    /// 需要的批數（未取整）
    pub batches_needed: Decimal,
}

/// 麵糊生產計劃
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoughPlan {
    /// 配方ID
    pub recipe_id: String,

    /// 配方名稱
    pub recipe_name: String,

    /// 所有直徑合計片數
    pub total_discs: Decimal,

    /// 依直徑明細（直徑遞增）
    pub breakdown: Vec<DiameterBatches>,

    /// 合計批數（向上取整到 0.1）
    pub total_batches_needed: Decimal,
}

impl DoughPlan {
    /// 查詢某直徑的明細
    pub fn for_diameter(&self, diameter_cm: u32) -> Option<&DiameterBatches> {
        self.breakdown.iter().find(|b| b.diameter_cm == diameter_cm)
    }
}

/// 餡料：單一直徑的層數與重量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiameterLayers {
    /// 直徑（cm）
    pub diameter_cm: u32,

    /// 需要的層數
    pub layers_needed: Decimal,

    /// 使用的每層克數
    pub grams_per_layer: Decimal,

    /// 該直徑合計克數
    pub weight_grams: Decimal,
}

/// 餡料生產計劃
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillingPlan {
    /// 配方ID
    pub recipe_id: String,

    /// 配方名稱
    pub recipe_name: String,

    /// 合計克數
    pub total_weight_grams: Decimal,

    /// 使用的每批總重量
    pub batch_weight_grams: Decimal,

    /// 合計鍋數（向上取整到 0.1）
    pub total_pans_needed: Decimal,

    /// 依直徑明細（直徑遞增）
    pub breakdown: Vec<DiameterLayers>,
}

impl FillingPlan {
    /// 查詢某直徑的明細
    pub fn for_diameter(&self, diameter_cm: u32) -> Option<&DiameterLayers> {
        self.breakdown.iter().find(|b| b.diameter_cm == diameter_cm)
    }
}

/// 採購清單項目
///
/// 同時提供需求量與現有庫存，由呼叫端決定是否採購
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListEntry {
    /// 原料
    pub ingredient: Ingredient,

    /// 合計需求量（原料本身的單位）
    pub required_quantity: Decimal,
}

impl ShoppingListEntry {
    pub fn new(ingredient: Ingredient, required_quantity: Decimal) -> Self {
        Self {
            ingredient,
            required_quantity,
        }
    }

    /// 需要採購的數量：max(0, 需求 - 庫存)
    pub fn quantity_to_buy(&self) -> Decimal {
        self.ingredient.shortfall(self.required_quantity)
    }

    /// 現有庫存是否足夠
    pub fn is_covered(&self) -> bool {
        self.quantity_to_buy().is_zero()
    }
}

/// 生產計劃
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 麵糊計劃（依配方目錄順序）
    pub dough_plans: Vec<DoughPlan>,

    /// 餡料計劃（依配方目錄順序）
    pub filling_plans: Vec<FillingPlan>,

    /// 採購清單（依原料分類排序）
    pub shopping_list: Vec<ShoppingListEntry>,
}

impl ProductionPlan {
    /// 創建空的生產計劃
    pub fn empty() -> Self {
        Self::default()
    }

    /// 沒有任何需要生產的項目
    pub fn is_empty(&self) -> bool {
        self.dough_plans.is_empty() && self.filling_plans.is_empty()
    }

    /// 查詢麵糊計劃
    pub fn dough_plan(&self, recipe_id: &str) -> Option<&DoughPlan> {
        self.dough_plans.iter().find(|p| p.recipe_id == recipe_id)
    }

    /// 查詢餡料計劃
    pub fn filling_plan(&self, recipe_id: &str) -> Option<&FillingPlan> {
        self.filling_plans.iter().find(|p| p.recipe_id == recipe_id)
    }

    /// 所有麵糊配方合計批數
    pub fn total_dough_batches(&self) -> Decimal {
        self.dough_plans.iter().map(|p| p.total_batches_needed).sum()
    }

    /// 所有餡料配方合計鍋數
    pub fn total_filling_pans(&self) -> Decimal {
        self.filling_plans.iter().map(|p| p.total_pans_needed).sum()
    }

    /// 查詢某原料的需求量
    pub fn required_quantity(&self, ingredient_id: &str) -> Option<Decimal> {
        self.shopping_list
            .iter()
            .find(|e| e.ingredient.id == ingredient_id)
            .map(|e| e.required_quantity)
    }

    /// 庫存不足、需要採購的項目
    pub fn purchase_needed(&self) -> impl Iterator<Item = &ShoppingListEntry> {
        self.shopping_list.iter().filter(|e| !e.is_covered())
    }
}
