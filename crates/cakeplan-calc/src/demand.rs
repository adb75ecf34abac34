//! 需求彙總：訂單明細 → 各配方各直徑的片數／層數

use cakeplan_core::{Order, OrderItem, PlanningConfig, Recipe, RecipeKind};
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::{PlanWarning, WarningKind};

/// 尺寸字串中的直徑，例如 "Bolo 20cm"
static DIAMETER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*cm").expect("Invalid regex"));

/// 配方ID → 直徑 → 數量（麵糊為片數，餡料為層數）
pub type UnitDemand = BTreeMap<String, BTreeMap<u32, Decimal>>;

/// 需求彙總結果
#[derive(Debug, Clone, Default)]
pub struct DemandSummary {
    /// 麵糊片數
    pub dough: UnitDemand,

    /// 餡料層數
    pub filling: UnitDemand,

    /// 被預設或略過的輸入
    pub warnings: Vec<PlanWarning>,
}

impl DemandSummary {
    pub fn is_empty(&self) -> bool {
        self.dough.is_empty() && self.filling.is_empty()
    }
}

/// 需求彙總器
pub struct DemandAggregator;

impl DemandAggregator {
    /// 從尺寸字串取出直徑（cm），無法解析或為 0 時回傳 None
    pub fn parse_diameter(size: &str) -> Option<u32> {
        DIAMETER_RE
            .captures(size)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|diameter| *diameter > 0)
    }

    /// 彙總所有訂單的產品明細
    pub fn aggregate(
        orders: &[Order],
        recipes: &[Recipe],
        config: &PlanningConfig,
    ) -> DemandSummary {
        let mut summary = DemandSummary::default();
        let discs_per_cake = Decimal::from(config.discs_per_cake);
        let layers_per_cake = Decimal::from(config.layers_per_cake);

        for order in orders {
            for item in order.product_items() {
                if item.quantity == 0 {
                    continue;
                }

                let diameter = Self::item_diameter(order, item, config, &mut summary.warnings);
                let quantity = item.quantity_decimal();

                if item.dough_recipe_id.is_some() || item.dough_flavor_name.is_some() {
                    match Self::resolve_recipe(
                        recipes,
                        RecipeKind::Dough,
                        item.dough_recipe_id.as_deref(),
                        item.dough_flavor_name.as_deref(),
                    ) {
                        Some(recipe) => {
                            let units = discs_per_cake * quantity;
                            Self::add(&mut summary.dough, &recipe.id, diameter, units);
                        }
                        None => {
                            let flavor = Self::reference_label(
                                item.dough_recipe_id.as_deref(),
                                item.dough_flavor_name.as_deref(),
                            );
                            tracing::warn!(
                                "訂單 {} 的麵糊口味 {} 找不到配方，略過",
                                order.id,
                                flavor
                            );
                            summary.warnings.push(PlanWarning::warning(
                                flavor.clone(),
                                WarningKind::UnmatchedDoughFlavor,
                                format!("訂單 {} 的麵糊口味 {} 找不到配方", order.id, flavor),
                            ));
                        }
                    }
                }

                if item.filling_recipe_id.is_some() || item.filling_flavor_name.is_some() {
                    match Self::resolve_recipe(
                        recipes,
                        RecipeKind::Filling,
                        item.filling_recipe_id.as_deref(),
                        item.filling_flavor_name.as_deref(),
                    ) {
                        Some(recipe) => {
                            let units = layers_per_cake * quantity;
                            Self::add(&mut summary.filling, &recipe.id, diameter, units);
                        }
                        None => {
                            let flavor = Self::reference_label(
                                item.filling_recipe_id.as_deref(),
                                item.filling_flavor_name.as_deref(),
                            );
                            tracing::warn!(
                                "訂單 {} 的餡料口味 {} 找不到配方，略過",
                                order.id,
                                flavor
                            );
                            summary.warnings.push(PlanWarning::warning(
                                flavor.clone(),
                                WarningKind::UnmatchedFillingFlavor,
                                format!("訂單 {} 的餡料口味 {} 找不到配方", order.id, flavor),
                            ));
                        }
                    }
                }
            }
        }

        tracing::debug!(
            "需求彙總：麵糊配方 {} 個，餡料配方 {} 個",
            summary.dough.len(),
            summary.filling.len()
        );

        summary
    }

    /// 解析明細直徑，失敗時記錄警告並使用預設直徑
    fn item_diameter(
        order: &Order,
        item: &OrderItem,
        config: &PlanningConfig,
        warnings: &mut Vec<PlanWarning>,
    ) -> u32 {
        match Self::parse_diameter(&item.size) {
            Some(diameter) => diameter,
            None => {
                tracing::warn!(
                    "訂單 {} 的尺寸 {:?} 無法解析，使用預設直徑 {}cm",
                    order.id,
                    item.size,
                    config.default_diameter_cm
                );
                warnings.push(PlanWarning::info(
                    order.id.clone(),
                    WarningKind::DefaultedDiameter,
                    format!(
                        "尺寸 {:?} 無法解析，使用預設直徑 {}cm",
                        item.size, config.default_diameter_cm
                    ),
                ));
                config.default_diameter_cm
            }
        }
    }

    /// 找出對應配方：先用配方ID，找不到再用名稱（舊資料相容）
    ///
    /// 類型不符的配方視為找不到
    fn resolve_recipe<'a>(
        recipes: &'a [Recipe],
        kind: RecipeKind,
        recipe_id: Option<&str>,
        flavor_name: Option<&str>,
    ) -> Option<&'a Recipe> {
        let by_id = recipe_id.and_then(|id| recipes.iter().find(|r| r.kind == kind && r.id == id));
        if by_id.is_some() {
            return by_id;
        }

        if let Some(id) = recipe_id {
            tracing::debug!("配方ID {} 無法對應 {:?} 配方，改用名稱比對", id, kind);
        }

        flavor_name.and_then(|name| recipes.iter().find(|r| r.kind == kind && r.name == name))
    }

    fn reference_label(recipe_id: Option<&str>, flavor_name: Option<&str>) -> String {
        flavor_name.or(recipe_id).unwrap_or_default().to_string()
    }

    fn add(demand: &mut UnitDemand, recipe_id: &str, diameter_cm: u32, units: Decimal) {
        *demand
            .entry(recipe_id.to_string())
            .or_default()
            .entry(diameter_cm)
            .or_insert(Decimal::ZERO) += units;
    }
}
