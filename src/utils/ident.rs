//! 域标识符生成

use rand::Rng;
use uuid::Uuid;

/// 生成教职工 ID：FAC + Unix 时间戳 + 3 位随机数字
pub fn generate_faculty_id() -> String {
    let mut rng = rand::rng();
    format!(
        "FAC{}{}",
        chrono::Utc::now().timestamp(),
        rng.random_range(100..=999)
    )
}

/// 生成学生 ID（UUID v4，无连字符）
pub fn generate_student_id() -> String {
    Uuid::new_v4().simple().to_string()
}
