// ==========================================
// 配件目录报价系统 - 配件领域模型
// ==========================================
// 职责: 配件记录（8 个标准字段）与目录集合
// 红线: 所有字段均为文本，保留源数据的货币符号与格式
// ==========================================

use crate::domain::types::CanonicalField;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// PartRecord - 配件记录
// ==========================================
// 用途: 导入层写入，检索层/报价层只读
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    pub item_no: String,          // 物料号（目录内唯一）
    pub item_description: String, // 物料描述
    pub item_group: String,       // 物料组
    pub model: String,            // 机型
    pub bhl_hln_flag: String,     // BHL/HLN 标记
    pub hsn_tax: String,          // HSN 税率（文本）
    pub sale_rate: String,        // 销售价（文本）
    pub mrp: String,              // 最高零售价（文本）
}

impl PartRecord {
    /// 按标准字段读取值
    pub fn field(&self, field: CanonicalField) -> &str {
        match field {
            CanonicalField::ItemNo => &self.item_no,
            CanonicalField::ItemDescription => &self.item_description,
            CanonicalField::ItemGroup => &self.item_group,
            CanonicalField::Model => &self.model,
            CanonicalField::BhlHlnFlag => &self.bhl_hln_flag,
            CanonicalField::HsnTax => &self.hsn_tax,
            CanonicalField::SaleRate => &self.sale_rate,
            CanonicalField::Mrp => &self.mrp,
        }
    }

    /// 按标准字段写入值
    pub fn set_field(&mut self, field: CanonicalField, value: String) {
        let slot = match field {
            CanonicalField::ItemNo => &mut self.item_no,
            CanonicalField::ItemDescription => &mut self.item_description,
            CanonicalField::ItemGroup => &mut self.item_group,
            CanonicalField::Model => &mut self.model,
            CanonicalField::BhlHlnFlag => &mut self.bhl_hln_flag,
            CanonicalField::HsnTax => &mut self.hsn_tax,
            CanonicalField::SaleRate => &mut self.sale_rate,
            CanonicalField::Mrp => &mut self.mrp,
        };
        *slot = value;
    }
}

// ==========================================
// Catalog - 配件目录
// ==========================================
// 有序集合，按 item_no 去重（后出现者覆盖，位置保持首次出现处）
// 生命周期: 导入成功整体创建，下次导入整体替换
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    records: Vec<PartRecord>,

    // item_no 原文 → records 下标（优先）
    #[serde(skip)]
    exact: HashMap<String, usize>,

    // 小写 item_no → records 下标（大小写不敏感回退）
    #[serde(skip)]
    lookup: HashMap<String, usize>,
}

impl Catalog {
    /// 从提取结果构建目录
    ///
    /// # 返回
    /// - Catalog: 去重后的目录
    /// - usize: 被合并的重复行数
    ///
    /// # 说明
    /// - item_no 为空的行不参与去重，全部保留
    pub fn from_records(records: Vec<PartRecord>) -> (Self, usize) {
        let mut kept: Vec<PartRecord> = Vec::with_capacity(records.len());
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut duplicates = 0;

        for record in records {
            if record.item_no.is_empty() {
                kept.push(record);
                continue;
            }

            match positions.get(&record.item_no) {
                Some(&idx) => {
                    duplicates += 1;
                    kept[idx] = record;
                }
                None => {
                    positions.insert(record.item_no.clone(), kept.len());
                    kept.push(record);
                }
            }
        }

        (Self::from_unique(kept, positions), duplicates)
    }

    fn from_unique(records: Vec<PartRecord>, exact: HashMap<String, usize>) -> Self {
        let mut lookup = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if record.item_no.is_empty() {
                continue;
            }
            lookup.entry(record.item_no.to_lowercase()).or_insert(idx);
        }
        Self {
            records,
            exact,
            lookup,
        }
    }

    /// 按 item_no 精确查找（原文优先，其次大小写不敏感）
    pub fn get(&self, item_no: &str) -> Option<&PartRecord> {
        self.position(item_no).map(|idx| &self.records[idx])
    }

    /// 按 item_no 精确查找下标
    ///
    /// 原文完全一致的记录优先；仅大小写不同的多条记录中取目录里最先出现者
    pub fn position(&self, item_no: &str) -> Option<usize> {
        let key = item_no.trim();
        if key.is_empty() {
            return None;
        }
        self.exact
            .get(key)
            .or_else(|| self.lookup.get(&key.to_lowercase()))
            .copied()
    }

    pub fn records(&self) -> &[PartRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PartRecord> {
        self.records.iter()
    }
}
