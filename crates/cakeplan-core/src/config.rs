//! 生產計劃配置模型
//!
//! 所有領域常數（每個蛋糕的片數、層數、預設產出與重量）集中於此，
//! 計算模組只讀取配置，不內嵌常數。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{PlanError, Result};

/// 生產計劃配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// 每個蛋糕需要的麵糊片數
    pub discs_per_cake: u32,

    /// 每個蛋糕需要的餡料層數
    pub layers_per_cake: u32,

    /// 尺寸無法解析時使用的直徑（cm）
    pub default_diameter_cm: u32,

    /// 配方沒有該直徑產出資料時的每批片數
    pub default_disc_yield: Decimal,

    /// 直徑不在餡料重量表時的每層克數
    pub default_grams_per_layer: Decimal,

    /// 餡料配方未設定每批總重量時的克數
    pub default_batch_weight_grams: Decimal,

    /// 每層餡料克數（依直徑）
    pub filling_weight_by_diameter: BTreeMap<u32, Decimal>,
}

impl PlanningConfig {
    /// 創建預設配置（4 片/蛋糕、3 層/蛋糕、預設 15cm）
    pub fn new() -> Self {
        Self {
            discs_per_cake: 4,
            layers_per_cake: 3,
            default_diameter_cm: 15,
            default_disc_yield: Decimal::from(4),
            default_grams_per_layer: Decimal::from(200),
            default_batch_weight_grams: Decimal::from(450),
            filling_weight_by_diameter: BTreeMap::new(),
        }
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置某直徑的每層餡料克數
    pub fn with_filling_weight(mut self, diameter_cm: u32, grams: Decimal) -> Self {
        self.filling_weight_by_diameter.insert(diameter_cm, grams);
        self
    }

    /// 建構器模式：設置每個蛋糕的片數
    pub fn with_discs_per_cake(mut self, discs: u32) -> Self {
        self.discs_per_cake = discs;
        self
    }

    /// 建構器模式：設置每個蛋糕的層數
    pub fn with_layers_per_cake(mut self, layers: u32) -> Self {
        self.layers_per_cake = layers;
        self
    }

    /// 建構器模式：設置預設直徑
    pub fn with_default_diameter(mut self, diameter_cm: u32) -> Self {
        self.default_diameter_cm = diameter_cm;
        self
    }

    /// 建構器模式：設置預設每批片數
    pub fn with_default_disc_yield(mut self, discs: Decimal) -> Self {
        self.default_disc_yield = discs;
        self
    }

    /// 建構器模式：設置預設每層克數
    pub fn with_default_grams_per_layer(mut self, grams: Decimal) -> Self {
        self.default_grams_per_layer = grams;
        self
    }

    /// 建構器模式：設置預設每批總重量
    pub fn with_default_batch_weight(mut self, grams: Decimal) -> Self {
        self.default_batch_weight_grams = grams;
        self
    }

    /// 某直徑的每層餡料克數
    pub fn grams_per_layer(&self, diameter_cm: u32) -> Decimal {
        self.filling_weight_by_diameter
            .get(&diameter_cm)
            .copied()
            .unwrap_or(self.default_grams_per_layer)
    }

    /// 檢查配置是否可用於計劃
    pub fn validate(&self) -> Result<()> {
        if self.discs_per_cake == 0 {
            return Err(PlanError::InvalidConfig("每個蛋糕的片數不可為 0".to_string()));
        }
        if self.layers_per_cake == 0 {
            return Err(PlanError::InvalidConfig("每個蛋糕的層數不可為 0".to_string()));
        }
        if self.default_diameter_cm == 0 {
            return Err(PlanError::InvalidConfig("預設直徑不可為 0".to_string()));
        }
        if self.default_disc_yield <= Decimal::ZERO {
            return Err(PlanError::InvalidConfig(format!(
                "預設每批片數必須大於 0，目前為 {}",
                self.default_disc_yield
            )));
        }
        if self.default_batch_weight_grams <= Decimal::ZERO {
            return Err(PlanError::InvalidConfig(format!(
                "預設每批總重量必須大於 0，目前為 {}",
                self.default_batch_weight_grams
            )));
        }
        if self.default_grams_per_layer < Decimal::ZERO {
            return Err(PlanError::InvalidConfig(format!(
                "預設每層克數不可為負，目前為 {}",
                self.default_grams_per_layer
            )));
        }
        if let Some((diameter, grams)) = self
            .filling_weight_by_diameter
            .iter()
            .find(|(_, grams)| **grams < Decimal::ZERO)
        {
            return Err(PlanError::InvalidConfig(format!(
                "直徑 {}cm 的每層克數不可為負，目前為 {}",
                diameter, grams
            )));
        }
        Ok(())
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self::new()
    }
}
