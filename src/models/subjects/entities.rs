use serde::{Deserialize, Serialize};

// 科目实体（预置目录，API 只读）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub code: String,
    pub credit_hours: u32,
    pub department: String,
    pub semester: i32,
}
