//! 生產計劃效能測試

use cakeplan::{Ingredient, Order, OrderItem, PlanningConfig, ProductionPlanner, Recipe};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;

const DIAMETERS: [u32; 4] = [15, 20, 25, 30];

fn fixture(order_count: usize) -> (Vec<Order>, Vec<Recipe>, Vec<Ingredient>) {
    let ingredients: Vec<Ingredient> = (0..40)
        .map(|i| {
            let category = format!("Cat-{}", i % 5);
            Ingredient::new(format!("ING-{i:03}"), format!("Ingrediente {i}"), "g", category)
                .with_stock(Decimal::from(1000))
                .with_min_stock(Decimal::from(200))
        })
        .collect();

    let mut recipes = Vec::new();
    for r in 0..10 {
        let mut dough = Recipe::dough(format!("M-{r:02}"), format!("Massa {r}"));
        let mut filling = Recipe::filling(format!("R-{r:02}"), format!("Recheio {r}"))
            .with_batch_weight(Decimal::from(450 + r * 50));
        for k in 0..6 {
            let dough_ingredient = format!("ING-{:03}", (r * 3 + k) % 40);
            let filling_ingredient = format!("ING-{:03}", (r * 7 + k) % 40);
            dough = dough.with_ingredient(dough_ingredient, Decimal::from(100 + k));
            filling = filling.with_ingredient(filling_ingredient, Decimal::from(50 + k));
        }
        for (i, diameter) in DIAMETERS.iter().enumerate() {
            dough = dough.with_disc_yield(*diameter, Decimal::from(4 - i as i64 % 3));
        }
        recipes.push(dough);
        recipes.push(filling);
    }

    let orders = (0..order_count)
        .map(|i| {
            Order::new(
                format!("PED-{i:05}"),
                vec![OrderItem::product(1 + (i % 3) as u32, format!("{}cm", DIAMETERS[i % 4]))
                    .with_dough_flavor(format!("Massa {}", i % 10))
                    .with_filling_flavor(format!("Recheio {}", (i / 3) % 10))],
            )
        })
        .collect();

    (orders, recipes, ingredients)
}

fn bench_plan(c: &mut Criterion) {
    let planner = ProductionPlanner::new(PlanningConfig::default()).unwrap();
    let (orders, recipes, ingredients) = fixture(1_000);

    c.bench_function("plan_1000_orders", |b| {
        b.iter(|| {
            planner
                .plan(black_box(&orders), black_box(&recipes), black_box(&ingredients))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
