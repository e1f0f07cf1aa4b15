//! VendorCatalog — static lookup of vendors per grid cell.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use posture_core::errors::CatalogError;
use posture_core::models::{CellAddress, Category, Function};
use posture_core::traits::IVendorCatalog;

/// Read-only vendor table keyed by cell. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct VendorCatalog {
    entries: HashMap<CellAddress, Vec<String>>,
}

/// One row of an externally supplied catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: Category,
    pub function: Function,
    pub vendors: Vec<String>,
}

impl VendorCatalog {
    /// A catalog with no vendors; every lookup comes back empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from entries. A later entry for the same cell replaces the earlier one.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let entries = entries
            .into_iter()
            .map(|e| (CellAddress::new(e.category, e.function), e.vendors))
            .collect();
        Self { entries }
    }

    /// Load from a JSON array of `{category, function, vendors}` objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
                message: e.to_string(),
            })?;
        Ok(Self::from_entries(entries))
    }

    /// Number of cells with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in table of Taiwanese security vendors, one entry per cell.
    pub fn builtin() -> Self {
        use Category::*;
        use Function::*;

        let table: [(Category, Function, &[&str]); 25] = [
            (Device, Identify, &["一休資訊", "台達電子", "思邦科技", "瑞恩資訊", "中芯數據", "中華龍網"]),
            (Device, Protect, &["三甲科技", "安碁資訊", "勤業眾信", "趨勢科技", "奧義智慧"]),
            (Device, Detect, &["元盾資安", "伊雲谷", "動力安全", "誠雲科技"]),
            (Device, Respond, &["中芯數據", "元盾資安", "安碁資訊"]),
            (Device, Recover, &["扇原科技", "肇真數位"]),
            (Application, Identify, &["又碩電腦", "元盾資安", "系微", "保華資安"]),
            (Application, Protect, &["三甲科技", "台眾電腦", "安侯企管", "瑞恩資訊"]),
            (Application, Detect, &["安碁資訊", "鼎原科技"]),
            (Application, Respond, &["中芯數據", "宏基資訊", "動力安全"]),
            (Application, Recover, &["安碁資訊"]),
            (Network, Identify, &["三甲科技", "安碁資訊", "承映資訊"]),
            (Network, Protect, &["一休資訊", "台眾電腦", "池安量子", "威碩系統"]),
            (Network, Detect, &["中飛科技", "思邦科技", "雲智維"]),
            (Network, Respond, &["三甲科技", "元盾資安", "如梭世代"]),
            (Network, Recover, &["如梭世代", "動力安全"]),
            (Data, Identify, &["台眾電腦", "安碁資訊", "中華電信"]),
            (Data, Protect, &["三甲科技", "台灣信威", "帝璽智慧"]),
            (Data, Detect, &["安碁資訊"]),
            (Data, Respond, &["三甲科技", "元盾資安"]),
            (Data, Recover, &["三甲科技", "云碩科技", "華碩雲端"]),
            (User, Identify, &["一休資訊", "帝濶智慧", "全球系統"]),
            (User, Protect, &["又碩電腦", "全域科技", "希臘智慧"]),
            (User, Detect, &["伊雲谷"]),
            (User, Respond, &["三甲科技", "肇真數位"]),
            (User, Recover, &["思邦科技"]),
        ];

        Self::from_entries(table.into_iter().map(|(category, function, vendors)| {
            CatalogEntry {
                category,
                function,
                vendors: vendors.iter().map(|v| v.to_string()).collect(),
            }
        }))
    }
}

impl IVendorCatalog for VendorCatalog {
    fn vendors(&self, cell: CellAddress) -> &[String] {
        self.entries.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }
}
