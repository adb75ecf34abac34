//! 批數換算：片數／層數 → 配方批數

use cakeplan_core::{
    DiameterBatches, DiameterLayers, DoughPlan, FillingPlan, PlanError, PlanningConfig, Recipe,
    RecipeKind,
};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

use crate::UnitDemand;

/// 除法殘差容忍位數（例如 4/3 + 2/3 應等於 2）
const QUOTIENT_SCALE: u32 = 12;

/// 向上取整到 0.1
///
/// 2.25 → 2.3，2.5 → 2.5
pub fn ceil_to_tenth(value: Decimal) -> Decimal {
    (value.round_dp(QUOTIENT_SCALE) * Decimal::TEN).ceil() / Decimal::TEN
}

/// 批數換算器
pub struct BatchResolver;

impl BatchResolver {
    /// 麵糊：各直徑片數 ÷ 每批片數，合計後向上取整到 0.1
    ///
    /// 單一直徑的批數不取整，只有配方合計取整
    pub fn resolve_dough(
        demand: &UnitDemand,
        recipes: &[Recipe],
        config: &PlanningConfig,
    ) -> cakeplan_core::Result<Vec<DoughPlan>> {
        let mut plans = Vec::new();

        for recipe in Self::recipes_with_demand(demand, recipes, RecipeKind::Dough) {
            let Some(by_diameter) = Self::nonzero_demand(demand, &recipe.id) else {
                continue;
            };

            let mut breakdown = Vec::with_capacity(by_diameter.len());
            let mut total_discs = Decimal::ZERO;
            let mut total_batches = Decimal::ZERO;

            for (&diameter_cm, &discs_needed) in &by_diameter {
                let yield_per_batch = recipe.disc_yield(diameter_cm, config.default_disc_yield);
                if yield_per_batch <= Decimal::ZERO {
                    return Err(PlanError::ZeroDiscYield {
                        recipe_id: recipe.id.clone(),
                        recipe_name: recipe.name.clone(),
                        diameter_cm,
                    });
                }

                let batches_needed = discs_needed / yield_per_batch;
                total_discs += discs_needed;
                total_batches += batches_needed;

                breakdown.push(DiameterBatches {
                    diameter_cm,
                    discs_needed,
                    yield_per_batch,
                    batches_needed,
                });
            }

            let total_batches_needed = ceil_to_tenth(total_batches);
            tracing::debug!(
                "麵糊 {} ({})：{} 片，{} 批",
                recipe.name,
                recipe.id,
                total_discs,
                total_batches_needed
            );

            plans.push(DoughPlan {
                recipe_id: recipe.id.clone(),
                recipe_name: recipe.name.clone(),
                total_discs,
                breakdown,
                total_batches_needed,
            });
        }

        Ok(plans)
    }

    /// 餡料：各直徑層數 × 每層克數，合計重量 ÷ 每批總重量，向上取整到 0.1
    pub fn resolve_filling(
        demand: &UnitDemand,
        recipes: &[Recipe],
        config: &PlanningConfig,
    ) -> cakeplan_core::Result<Vec<FillingPlan>> {
        let mut plans = Vec::new();

        for recipe in Self::recipes_with_demand(demand, recipes, RecipeKind::Filling) {
            let Some(by_diameter) = Self::nonzero_demand(demand, &recipe.id) else {
                continue;
            };

            let batch_weight_grams = recipe.batch_weight(config.default_batch_weight_grams);
            if batch_weight_grams <= Decimal::ZERO {
                return Err(PlanError::ZeroBatchWeight {
                    recipe_id: recipe.id.clone(),
                    recipe_name: recipe.name.clone(),
                });
            }

            let breakdown: Vec<DiameterLayers> = by_diameter
                .iter()
                .map(|(&diameter_cm, &layers_needed)| {
                    let grams_per_layer = config.grams_per_layer(diameter_cm);
                    DiameterLayers {
                        diameter_cm,
                        layers_needed,
                        grams_per_layer,
                        weight_grams: layers_needed * grams_per_layer,
                    }
                })
                .collect();

            let total_weight_grams: Decimal = breakdown.iter().map(|b| b.weight_grams).sum();
            let total_pans_needed = ceil_to_tenth(total_weight_grams / batch_weight_grams);

            tracing::debug!(
                "餡料 {} ({})：{}g，{} 鍋",
                recipe.name,
                recipe.id,
                total_weight_grams,
                total_pans_needed
            );

            plans.push(FillingPlan {
                recipe_id: recipe.id.clone(),
                recipe_name: recipe.name.clone(),
                total_weight_grams,
                batch_weight_grams,
                total_pans_needed,
                breakdown,
            });
        }

        Ok(plans)
    }

    /// 依配方目錄順序列出有需求的配方（重複ID只取第一個）
    fn recipes_with_demand<'a>(
        demand: &'a UnitDemand,
        recipes: &'a [Recipe],
        kind: RecipeKind,
    ) -> impl Iterator<Item = &'a Recipe> {
        let mut seen = HashSet::new();
        recipes.iter().filter(move |recipe| {
            recipe.kind == kind
                && demand.contains_key(&recipe.id)
                && seen.insert(recipe.id.as_str())
        })
    }

    /// 去除數量為 0 的直徑，全部為 0 時回傳 None
    fn nonzero_demand(demand: &UnitDemand, recipe_id: &str) -> Option<BTreeMap<u32, Decimal>> {
        let by_diameter: BTreeMap<u32, Decimal> = demand
            .get(recipe_id)?
            .iter()
            .filter(|(_, units)| !units.is_zero())
            .map(|(&diameter, &units)| (diameter, units))
            .collect();

        if by_diameter.is_empty() {
            None
        } else {
            Some(by_diameter)
        }
    }
}
