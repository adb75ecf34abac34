//! 訂單模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 訂單明細類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// 蛋糕產品（參與生產計劃）
    Product,
    /// 加購品
    Addon,
    /// 服務
    Service,
}

/// 訂單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// 報價（尚未確認）
    Quote,
    /// 已確認
    Confirmed,
    /// 生產中
    InProduction,
    /// 已交付
    Delivered,
    /// 已取消
    Cancelled,
}

impl OrderStatus {
    /// 是否需要排入生產（已確認或生產中）
    pub fn is_committed(&self) -> bool {
        matches!(self, OrderStatus::Confirmed | OrderStatus::InProduction)
    }

    /// 是否為有效訂單（排除報價與取消）
    pub fn is_active(&self) -> bool {
        !matches!(self, OrderStatus::Quote | OrderStatus::Cancelled)
    }
}

/// 訂單明細
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// 明細類型
    pub item_kind: ItemKind,

    /// 蛋糕數量
    pub quantity: u32,

    /// 尺寸描述（需包含 `<N>cm`）
    pub size: String,

    /// 麵糊口味名稱（舊資料以名稱比對）
    pub dough_flavor_name: Option<String>,

    /// 餡料口味名稱（舊資料以名稱比對）
    pub filling_flavor_name: Option<String>,

    /// 麵糊配方ID（優先於名稱）
    pub dough_recipe_id: Option<String>,

    /// 餡料配方ID（優先於名稱）
    pub filling_recipe_id: Option<String>,
}

impl OrderItem {
    /// 創建蛋糕產品明細
    pub fn product(quantity: u32, size: impl Into<String>) -> Self {
        Self {
            item_kind: ItemKind::Product,
            quantity,
            size: size.into(),
            dough_flavor_name: None,
            filling_flavor_name: None,
            dough_recipe_id: None,
            filling_recipe_id: None,
        }
    }

    /// 創建非產品明細（加購品、服務）
    pub fn non_product(item_kind: ItemKind, quantity: u32) -> Self {
        Self {
            item_kind,
            ..Self::product(quantity, "")
        }
    }

    /// 建構器模式：設置麵糊口味
    pub fn with_dough_flavor(mut self, name: impl Into<String>) -> Self {
        self.dough_flavor_name = Some(name.into());
        self
    }

    /// 建構器模式：設置餡料口味
    pub fn with_filling_flavor(mut self, name: impl Into<String>) -> Self {
        self.filling_flavor_name = Some(name.into());
        self
    }

    /// 建構器模式：設置麵糊配方ID
    pub fn with_dough_recipe_id(mut self, recipe_id: impl Into<String>) -> Self {
        self.dough_recipe_id = Some(recipe_id.into());
        self
    }

    /// 建構器模式：設置餡料配方ID
    pub fn with_filling_recipe_id(mut self, recipe_id: impl Into<String>) -> Self {
        self.filling_recipe_id = Some(recipe_id.into());
        self
    }

    /// 是否參與生產計劃
    pub fn is_product(&self) -> bool {
        self.item_kind == ItemKind::Product
    }

    /// 數量（Decimal）
    pub fn quantity_decimal(&self) -> Decimal {
        Decimal::from(self.quantity)
    }
}

/// 訂單
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID
    pub id: String,

    /// 客戶名稱
    pub client_name: Option<String>,

    /// 訂單狀態
    pub status: OrderStatus,

    /// 交付日期
    pub delivery_date: Option<NaiveDate>,

    /// 明細
    pub items: Vec<OrderItem>,
}

impl Order {
    /// 創建已確認的訂單
    pub fn new(id: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Self {
            id: id.into(),
            client_name: None,
            status: OrderStatus::Confirmed,
            delivery_date: None,
            items,
        }
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// 建構器模式：設置交付日期
    pub fn with_delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    /// 建構器模式：設置客戶名稱
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// 產品明細
    pub fn product_items(&self) -> impl Iterator<Item = &OrderItem> {
        self.items.iter().filter(|item| item.is_product())
    }
}

/// 計劃期間（包含起訖日）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PlanningWindow {
    /// 創建計劃期間
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// 檢查日期是否在期間內
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 檢查訂單是否應排入本期生產
    ///
    /// 只有已確認或生產中、且交付日期落在期間內的訂單會被選入；
    /// 沒有交付日期的訂單不排入有期間限制的計劃
    pub fn includes(&self, order: &Order) -> bool {
        order.status.is_committed()
            && order
                .delivery_date
                .map(|date| self.contains(date))
                .unwrap_or(false)
    }
}
