//! 技術表：每個配方每個直徑的用料明細（供列印）

use cakeplan_core::{Ingredient, ProductionPlan, Recipe, RecipeKind};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// 列印用的小數位數
const SHEET_SCALE: u32 = 4;

/// 單一原料用量
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetLine {
    pub ingredient_id: String,
    /// 原料名稱（不在目錄時使用ID）
    pub ingredient_name: String,
    pub unit: String,
    pub quantity: Decimal,
}

/// 技術表列：某配方在某直徑的批數與用料
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalSheetRow {
    pub recipe_id: String,
    pub recipe_name: String,
    pub kind: RecipeKind,
    pub diameter_cm: u32,
    /// 該直徑的批數（麵糊）或鍋數（餡料），未取整
    pub batches: Decimal,
    pub lines: Vec<SheetLine>,
}

/// 技術表
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TechnicalSheet {
    pub rows: Vec<TechnicalSheetRow>,
}

impl TechnicalSheet {
    /// 由生產計劃建立技術表
    ///
    /// 麵糊使用各直徑的批數，餡料使用各直徑重量 ÷ 每批總重量
    pub fn build(plan: &ProductionPlan, recipes: &[Recipe], ingredients: &[Ingredient]) -> Self {
        let mut rows = Vec::new();

        for dough in &plan.dough_plans {
            let Some(recipe) = Self::find_recipe(recipes, RecipeKind::Dough, &dough.recipe_id)
            else {
                continue;
            };
            for entry in &dough.breakdown {
                rows.push(Self::row(recipe, entry.diameter_cm, entry.batches_needed, ingredients));
            }
        }

        for filling in &plan.filling_plans {
            let Some(recipe) = Self::find_recipe(recipes, RecipeKind::Filling, &filling.recipe_id)
            else {
                continue;
            };
            for entry in &filling.breakdown {
                let pans = entry.weight_grams / filling.batch_weight_grams;
                rows.push(Self::row(recipe, entry.diameter_cm, pans, ingredients));
            }
        }

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn find_recipe<'a>(
        recipes: &'a [Recipe],
        kind: RecipeKind,
        recipe_id: &str,
    ) -> Option<&'a Recipe> {
        recipes.iter().find(|r| r.kind == kind && r.id == recipe_id)
    }

    fn row(
        recipe: &Recipe,
        diameter_cm: u32,
        batches: Decimal,
        ingredients: &[Ingredient],
    ) -> TechnicalSheetRow {
        let batches = batches.round_dp(SHEET_SCALE);
        let lines = recipe
            .batch_ingredients
            .iter()
            .map(|line| {
                let catalog = ingredients.iter().find(|i| i.id == line.ingredient_id);
                SheetLine {
                    ingredient_id: line.ingredient_id.clone(),
                    ingredient_name: catalog
                        .map(|i| i.name.clone())
                        .unwrap_or_else(|| line.ingredient_id.clone()),
                    unit: catalog.map(|i| i.unit.clone()).unwrap_or_default(),
                    quantity: (line.quantity * batches).round_dp(SHEET_SCALE),
                }
            })
            .collect();

        TechnicalSheetRow {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            kind: recipe.kind,
            diameter_cm,
            batches,
            lines,
        }
    }
}

impl fmt::Display for TechnicalSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let label = match row.kind {
                RecipeKind::Dough => "批",
                RecipeKind::Filling => "鍋",
            };
            writeln!(
                f,
                "{} | {}cm | {} {}",
                row.recipe_name,
                row.diameter_cm,
                row.batches.normalize(),
                label
            )?;
            for line in &row.lines {
                writeln!(
                    f,
                    "    {:<24} {:>12} {}",
                    line.ingredient_name,
                    line.quantity.normalize(),
                    line.unit
                )?;
            }
        }
        Ok(())
    }
}
