//! # Cakeplan Core
//!
//! 生產計劃核心資料模型與類型定義

pub mod config;
pub mod ingredient;
pub mod order;
pub mod plan;
pub mod recipe;

// Re-export 主要類型
pub use config::PlanningConfig;
pub use ingredient::Ingredient;
pub use order::{ItemKind, Order, OrderItem, OrderStatus, PlanningWindow};
pub use plan::{
    DiameterBatches, DiameterLayers, DoughPlan, FillingPlan, ProductionPlan, ShoppingListEntry,
};
pub use recipe::{BatchIngredient, Recipe, RecipeKind};

/// 生產計劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("配方 {recipe_name} ({recipe_id}) 在直徑 {diameter_cm}cm 沒有有效產出，請先修正配方")]
    ZeroDiscYield {
        recipe_id: String,
        recipe_name: String,
        diameter_cm: u32,
    },

    #[error("配方 {recipe_name} ({recipe_id}) 每批總重量為 0，請先修正配方再計劃")]
    ZeroBatchWeight {
        recipe_id: String,
        recipe_name: String,
    },

    #[error("無效的計劃配置: {0}")]
    InvalidConfig(String),

    #[error("計劃配置解析失敗: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl PlanError {
    /// 是否為配置錯誤（配方或計劃參數需要修正）
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            PlanError::ZeroDiscYield { .. }
                | PlanError::ZeroBatchWeight { .. }
                | PlanError::InvalidConfig(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_identifies_recipe_and_diameter() {
        let err = PlanError::ZeroDiscYield {
            recipe_id: "M-01".to_string(),
            recipe_name: "Baunilha".to_string(),
            diameter_cm: 20,
        };

        let message = err.to_string();
        assert!(message.contains("Baunilha"));
        assert!(message.contains("M-01"));
        assert!(message.contains("20cm"));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_parse_error_is_not_configuration_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PlanError::from(parse_err);
        assert!(!err.is_configuration_error());
    }
}
