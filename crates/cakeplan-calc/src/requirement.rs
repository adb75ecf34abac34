//! 原料需求彙總：配方批數 × 每批用料

use cakeplan_core::{DoughPlan, FillingPlan, Ingredient, Recipe, RecipeKind};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

use crate::{PlanWarning, WarningKind};

/// 原料需求彙總結果
#[derive(Debug, Clone, Default)]
pub struct IngredientRequirements {
    /// 原料ID → 合計需求量
    pub quantities: BTreeMap<String, Decimal>,

    /// 配方用料不在原料目錄中的記錄
    pub warnings: Vec<PlanWarning>,
}

impl IngredientRequirements {
    pub fn get(&self, ingredient_id: &str) -> Decimal {
        self.quantities
            .get(ingredient_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

/// 原料需求彙總器
pub struct RequirementAggregator;

impl RequirementAggregator {
    /// 彙總所有麵糊與餡料配方的原料需求
    ///
    /// 麵糊乘以合計批數，餡料乘以合計鍋數；同一原料跨配方加總，不做單位換算
    pub fn aggregate(
        dough_plans: &[DoughPlan],
        filling_plans: &[FillingPlan],
        recipes: &[Recipe],
        ingredients: &[Ingredient],
    ) -> IngredientRequirements {
        let known: HashSet<&str> = ingredients.iter().map(|i| i.id.as_str()).collect();
        let mut result = IngredientRequirements::default();

        let multipliers = dough_plans
            .iter()
            .map(|p| (RecipeKind::Dough, p.recipe_id.as_str(), p.total_batches_needed))
            .chain(
                filling_plans
                    .iter()
                    .map(|p| (RecipeKind::Filling, p.recipe_id.as_str(), p.total_pans_needed)),
            );

        for (kind, recipe_id, batches) in multipliers {
            let Some(recipe) = recipes.iter().find(|r| r.kind == kind && r.id == recipe_id) else {
                tracing::debug!("計劃中的配方 {} 不在配方目錄，略過", recipe_id);
                continue;
            };

            for line in &recipe.batch_ingredients {
                if !known.contains(line.ingredient_id.as_str()) {
                    tracing::warn!(
                        "配方 {} 的原料 {} 不在原料目錄中，略過",
                        recipe.name,
                        line.ingredient_id
                    );
                    result.warnings.push(PlanWarning::warning(
                        line.ingredient_id.clone(),
                        WarningKind::MissingIngredient,
                        format!(
                            "配方 {} ({}) 的原料 {} 不在原料目錄中",
                            recipe.name, recipe.id, line.ingredient_id
                        ),
                    ));
                    continue;
                }

                *result
                    .quantities
                    .entry(line.ingredient_id.clone())
                    .or_insert(Decimal::ZERO) += line.quantity * batches;
            }
        }

        tracing::debug!("原料需求：{} 種原料", result.quantities.len());

        result
    }
}
