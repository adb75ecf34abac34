//! 採購清單

use cakeplan_core::{Ingredient, ShoppingListEntry};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

/// 採購清單建立器
pub struct ShoppingListBuilder;

impl ShoppingListBuilder {
    /// 建立採購清單
    ///
    /// 每個需求量非 0 的原料一筆，依分類名稱排序（同分類保持原料目錄順序）。
    /// 庫存足夠的原料也會列出。
    pub fn build(
        requirements: &BTreeMap<String, Decimal>,
        ingredients: &[Ingredient],
    ) -> Vec<ShoppingListEntry> {
        let mut seen = HashSet::new();
        let mut entries: Vec<ShoppingListEntry> = ingredients
            .iter()
            .filter(|ingredient| seen.insert(ingredient.id.as_str()))
            .filter_map(|ingredient| {
                requirements
                    .get(&ingredient.id)
                    .filter(|qty| !qty.is_zero())
                    .map(|&qty| ShoppingListEntry::new(ingredient.clone(), qty))
            })
            .collect();

        entries.sort_by(|a, b| a.ingredient.category.cmp(&b.ingredient.category));
        entries
    }
}
