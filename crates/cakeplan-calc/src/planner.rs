//! 生產計劃主計算器

use cakeplan_core::{Ingredient, Order, PlanningConfig, PlanningWindow, ProductionPlan, Recipe};

use crate::batching::BatchResolver;
use crate::demand::DemandAggregator;
use crate::low_stock::LowStockReporter;
use crate::requirement::RequirementAggregator;
use crate::shopping::ShoppingListBuilder;
use crate::PlanResult;

/// 生產計劃計算器
///
/// 無狀態：每次呼叫都從輸入重新計算，相同輸入得到相同計劃
#[derive(Debug, Clone, Default)]
pub struct ProductionPlanner {
    /// 計劃配置
    config: PlanningConfig,
}

impl ProductionPlanner {
    /// 創建新的計算器（配置會先經過檢查）
    pub fn new(config: PlanningConfig) -> cakeplan_core::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 計算某期間的生產計劃
    ///
    /// 只計入已確認或生產中、且交付日期在期間內的訂單
    pub fn plan_window(
        &self,
        window: PlanningWindow,
        orders: &[Order],
        recipes: &[Recipe],
        ingredients: &[Ingredient],
    ) -> cakeplan_core::Result<PlanResult> {
        let selected: Vec<Order> = orders
            .iter()
            .filter(|order| window.includes(order))
            .cloned()
            .collect();

        tracing::debug!(
            "期間 {} ~ {}：選入訂單 {} / {} 筆",
            window.start,
            window.end,
            selected.len(),
            orders.len()
        );

        self.plan(&selected, recipes, ingredients)
    }

    /// 主計劃入口
    ///
    /// 報價與已取消的訂單不計入；已交付的訂單仍會計入，
    /// 方便回算過去的用量。只要排已確認或生產中的訂單，請用 [`Self::plan_window`]
    pub fn plan(
        &self,
        orders: &[Order],
        recipes: &[Recipe],
        ingredients: &[Ingredient],
    ) -> cakeplan_core::Result<PlanResult> {
        tracing::info!(
            "開始生產計劃：訂單 {} 筆，配方 {} 個，原料 {} 種",
            orders.len(),
            recipes.len(),
            ingredients.len()
        );

        let start_time = std::time::Instant::now();
        let mut result = PlanResult::empty();

        // Step 1: 需求彙總
        tracing::debug!("Step 1: 需求彙總");
        let active: Vec<Order> = orders
            .iter()
            .filter(|order| order.status.is_active())
            .cloned()
            .collect();
        let demand = DemandAggregator::aggregate(&active, recipes, &self.config);
        for warning in demand.warnings {
            result.add_warning(warning);
        }

        // Step 2: 批數換算
        tracing::debug!("Step 2: 批數換算");
        let dough_plans = BatchResolver::resolve_dough(&demand.dough, recipes, &self.config)?;
        let filling_plans = BatchResolver::resolve_filling(&demand.filling, recipes, &self.config)?;

        // Step 3: 原料需求
        tracing::debug!("Step 3: 原料需求");
        let requirements =
            RequirementAggregator::aggregate(&dough_plans, &filling_plans, recipes, ingredients);
        for warning in requirements.warnings {
            result.add_warning(warning);
        }

        // Step 4: 採購清單
        tracing::debug!("Step 4: 採購清單");
        let shopping_list = ShoppingListBuilder::build(&requirements.quantities, ingredients);

        // Step 5: 低庫存（與需求無關）
        tracing::debug!("Step 5: 低庫存");
        result.low_stock = LowStockReporter::find(ingredients);

        result.plan = ProductionPlan {
            dough_plans,
            filling_plans,
            shopping_list,
        };
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        if result.plan.is_empty() {
            tracing::info!("沒有需要生產的項目");
        }
        tracing::info!("生產計劃完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "麵糊 {} 種 / {} 批，餡料 {} 種 / {} 鍋，採購項目 {} 種，警告 {} 筆",
            result.plan.dough_plans.len(),
            result.plan.total_dough_batches(),
            result.plan.filling_plans.len(),
            result.plan.total_filling_pans(),
            result.plan.shopping_list.len(),
            result.warnings.len()
        );

        Ok(result)
    }

    /// 獲取計劃配置引用
    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WarningKind, WarningSeverity};
    use cakeplan_core::{OrderItem, OrderStatus, PlanError};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn recipes() -> Vec<Recipe> {
        vec![
            Recipe::dough("M-01", "Vanilla")
                .with_ingredient("FARINHA", Decimal::from(500))
                .with_disc_yield(15, Decimal::from(4)),
            Recipe::filling("R-01", "Brigadeiro").with_ingredient("LEITE_COND", Decimal::from(395)),
        ]
    }

    fn ingredients() -> Vec<Ingredient> {
        vec![
            Ingredient::new("FARINHA", "Farinha", "g", "Secos").with_stock(Decimal::from(300)),
            Ingredient::new("LEITE_COND", "Leite condensado", "g", "Laticínios")
                .with_min_stock(Decimal::from(395)),
        ]
    }

    fn vanilla_order(id: &str, quantity: u32) -> Order {
        Order::new(
            id,
            vec![OrderItem::product(quantity, "15cm")
                .with_dough_flavor("Vanilla")
                .with_filling_flavor("Brigadeiro")],
        )
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = ProductionPlanner::new(PlanningConfig::new().with_discs_per_cake(0)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_order_plan() {
        let planner = ProductionPlanner::default();

        let result = planner.plan(&[], &recipes(), &ingredients()).unwrap();

        assert!(result.plan.is_empty());
        assert!(result.plan.shopping_list.is_empty());
        assert!(result.warnings.is_empty());
        // 低庫存仍會回報
        assert_eq!(result.low_stock.len(), 1);
    }

    #[test]
    fn test_simple_plan() {
        let planner = ProductionPlanner::default();

        let result = planner
            .plan(&[vanilla_order("PED-001", 2)], &recipes(), &ingredients())
            .unwrap();

        let dough = result.plan.dough_plan("M-01").unwrap();
        assert_eq!(dough.total_discs, Decimal::from(8));
        assert_eq!(dough.total_batches_needed, Decimal::from(2));

        let filling = result.plan.filling_plan("R-01").unwrap();
        // 6 層 × 200g = 1200g，1200 / 450 = 2.666... → 2.7
        assert_eq!(filling.total_weight_grams, Decimal::from(1200));
        assert_eq!(filling.total_pans_needed, Decimal::new(27, 1));

        assert_eq!(result.plan.required_quantity("FARINHA"), Some(Decimal::from(1000)));
        assert_eq!(
            result.plan.required_quantity("LEITE_COND"),
            Some(Decimal::new(10665, 1))
        );
        // 分類排序：Laticínios 在 Secos 之前
        assert_eq!(result.plan.shopping_list[0].ingredient.id, "LEITE_COND");
        assert!(result.calculation_time_ms.is_some());
    }

    #[test]
    fn test_quotes_and_cancelled_orders_excluded() {
        let planner = ProductionPlanner::default();
        let orders = vec![
            vanilla_order("PED-001", 1).with_status(OrderStatus::Quote),
            vanilla_order("PED-002", 1).with_status(OrderStatus::Cancelled),
        ];

        let result = planner.plan(&orders, &recipes(), &ingredients()).unwrap();

        assert!(result.plan.is_empty());
    }

    #[test]
    fn test_delivered_orders_planned_only_without_window() {
        let planner = ProductionPlanner::default();
        let day = |d| NaiveDate::from_ymd_opt(2025, 11, d).unwrap();
        let orders = vec![vanilla_order("PED-001", 1)
            .with_status(OrderStatus::Delivered)
            .with_delivery_date(day(12))];

        let result = planner.plan(&orders, &recipes(), &ingredients()).unwrap();
        assert_eq!(result.plan.dough_plan("M-01").unwrap().total_discs, Decimal::from(4));

        let window = PlanningWindow::new(day(10), day(16));
        let result = planner
            .plan_window(window, &orders, &recipes(), &ingredients())
            .unwrap();
        assert!(result.plan.is_empty());
    }

    #[test]
    fn test_plan_window() {
        let planner = ProductionPlanner::default();
        let day = |d| NaiveDate::from_ymd_opt(2025, 11, d).unwrap();
        let window = PlanningWindow::new(day(10), day(16));
        let orders = vec![
            vanilla_order("PED-001", 1).with_delivery_date(day(12)),
            vanilla_order("PED-002", 5).with_delivery_date(day(20)),
            vanilla_order("PED-003", 5),
        ];

        let result = planner
            .plan_window(window, &orders, &recipes(), &ingredients())
            .unwrap();

        assert_eq!(result.plan.dough_plan("M-01").unwrap().total_discs, Decimal::from(4));
    }

    #[test]
    fn test_configuration_error_aborts_plan() {
        let planner = ProductionPlanner::default();
        let recipes = vec![Recipe::dough("M-01", "Vanilla").with_disc_yield(15, Decimal::ZERO)];

        let err = planner
            .plan(&[vanilla_order("PED-001", 1)], &recipes, &ingredients())
            .unwrap_err();

        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("15cm"));
    }

    #[test]
    fn test_warnings_collected() {
        let planner = ProductionPlanner::default();
        let orders = vec![Order::new(
            "PED-001",
            vec![OrderItem::product(1, "grande")
                .with_dough_flavor("Vanilla")
                .with_filling_flavor("Unknown Flavor")],
        )];
        let recipes =
            vec![Recipe::dough("M-01", "Vanilla").with_ingredient("CACAU", Decimal::from(50))];

        let result = planner.plan(&orders, &recipes, &ingredients()).unwrap();

        let defaulted: Vec<_> = result.warnings_of(WarningKind::DefaultedDiameter).collect();
        assert_eq!(defaulted.len(), 1);
        assert_eq!(defaulted[0].severity, WarningSeverity::Info);
        assert_eq!(result.warnings_of(WarningKind::UnmatchedFillingFlavor).count(), 1);
        assert_eq!(result.warnings_of(WarningKind::MissingIngredient).count(), 1);
        assert!(result.plan.shopping_list.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let planner = ProductionPlanner::default();
        let orders = vec![vanilla_order("PED-001", 3), vanilla_order("PED-002", 1)];

        let first = planner.plan(&orders, &recipes(), &ingredients()).unwrap();
        let second = planner.plan(&orders, &recipes(), &ingredients()).unwrap();

        assert_eq!(first.plan, second.plan);
        assert_eq!(first.low_stock, second.low_stock);
        assert_eq!(first.warnings, second.warnings);
    }

    const SIZES: [&str; 4] = ["15cm", "20cm", "Bolo 25cm", "grande"];
    const DOUGH_FLAVORS: [&str; 3] = ["Vanilla", "Chocolate", "Unknown Flavor"];

    fn random_orders(lines: &[(u32, usize, usize, bool)]) -> Vec<Order> {
        lines
            .iter()
            .enumerate()
            .map(|(i, &(quantity, size, flavor, with_filling))| {
                let mut item = OrderItem::product(quantity, SIZES[size])
                    .with_dough_flavor(DOUGH_FLAVORS[flavor]);
                if with_filling {
                    item = item.with_filling_flavor("Brigadeiro");
                }
                Order::new(format!("PED-{i:03}"), vec![item])
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_plan_is_deterministic(
            lines in prop::collection::vec((0u32..6, 0usize..4, 0usize..3, any::<bool>()), 0..20)
        ) {
            let planner = ProductionPlanner::default();
            let orders = random_orders(&lines);

            let first = planner.plan(&orders, &recipes(), &ingredients()).unwrap();
            let second = planner.plan(&orders, &recipes(), &ingredients()).unwrap();

            prop_assert_eq!(&first.plan, &second.plan);
            prop_assert_eq!(&first.warnings, &second.warnings);
        }
    }
}
