//! 每週生產計劃示例

use cakeplan::{
    logging, Ingredient, Order, OrderItem, PlanningConfig, PlanningWindow, ProductionPlanner,
    Recipe, TechnicalSheet,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

const CONFIG_JSON: &str = r#"{
    "filling_weight_by_diameter": { "15": 150, "20": 250, "25": 350 }
}"#;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = PlanningConfig::from_json(CONFIG_JSON)?;
    let planner = ProductionPlanner::new(config)?;

    let recipes = vec![
        Recipe::dough("M-01", "Baunilha")
            .with_ingredient("FARINHA", Decimal::from(500))
            .with_ingredient("ACUCAR", Decimal::from(300))
            .with_ingredient("OVO", Decimal::from(6))
            .with_disc_yield(15, Decimal::from(4))
            .with_disc_yield(20, Decimal::from(2))
            .with_yield_description("1 fornada"),
        Recipe::filling("R-01", "Brigadeiro")
            .with_ingredient("LEITE_COND", Decimal::from(395))
            .with_ingredient("CACAU", Decimal::from(40))
            .with_batch_weight(Decimal::from(450)),
    ];

    let ingredients = vec![
        Ingredient::new("FARINHA", "Farinha de trigo", "g", "Secos")
            .with_stock(Decimal::from(1000)),
        Ingredient::new("ACUCAR", "Açúcar", "g", "Secos").with_stock(Decimal::from(2000)),
        Ingredient::new("CACAU", "Cacau 50%", "g", "Secos").with_min_stock(Decimal::from(200)),
        Ingredient::new("OVO", "Ovo", "un", "Frescos").with_stock(Decimal::from(24)),
        Ingredient::new("LEITE_COND", "Leite condensado", "g", "Laticínios"),
    ];

    let monday = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap_or_default();
    let sunday = NaiveDate::from_ymd_opt(2025, 11, 16).unwrap_or_default();

    let orders = vec![
        Order::new(
            "PED-001",
            vec![OrderItem::product(2, "15cm")
                .with_dough_flavor("Baunilha")
                .with_filling_flavor("Brigadeiro")],
        )
        .with_client_name("Ana")
        .with_delivery_date(monday),
        Order::new(
            "PED-002",
            vec![OrderItem::product(1, "Bolo 20cm")
                .with_dough_recipe_id("M-01")
                .with_filling_recipe_id("R-01")],
        )
        .with_client_name("Bruno")
        .with_delivery_date(sunday),
    ];

    let result = planner.plan_window(
        PlanningWindow::new(monday, sunday),
        &orders,
        &recipes,
        &ingredients,
    )?;
    let plan = &result.plan;

    if plan.is_empty() {
        println!("本週沒有需要生產的項目");
        return Ok(());
    }

    println!("=== 麵糊 ===");
    for dough in &plan.dough_plans {
        println!(
            "{}: {} 片，{} 批",
            dough.recipe_name, dough.total_discs, dough.total_batches_needed
        );
    }

    println!("\n=== 餡料 ===");
    for filling in &plan.filling_plans {
        println!(
            "{}: {}g，{} 鍋",
            filling.recipe_name, filling.total_weight_grams, filling.total_pans_needed
        );
    }

    println!("\n=== 採購清單 ===");
    for entry in &plan.shopping_list {
        println!(
            "[{}] {}: 需要 {} {}，庫存 {}，採購 {}",
            entry.ingredient.category,
            entry.ingredient.name,
            entry.required_quantity.normalize(),
            entry.ingredient.unit,
            entry.ingredient.current_stock,
            entry.quantity_to_buy().normalize()
        );
    }

    println!("\n=== 低庫存 ===");
    for ingredient in &result.low_stock {
        println!(
            "{}: {} / 最低 {}",
            ingredient.name, ingredient.current_stock, ingredient.min_stock
        );
    }

    println!("\n=== 技術表 ===");
    print!("{}", TechnicalSheet::build(plan, &recipes, &ingredients));

    for warning in &result.warnings {
        tracing::warn!("{:?}: {}", warning.kind, warning.message);
    }

    Ok(())
}
