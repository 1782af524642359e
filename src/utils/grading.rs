//! 成绩与考勤的派生字段计算
//!
//! 派生字段（考勤百分比、加权总分、等级）一律在服务端重算，
//! 客户端提交的派生值会被丢弃。

/// 期中 30% + 期末 50% + 作业 20%
const MIDTERM_WEIGHT: f64 = 0.3;
const FINAL_WEIGHT: f64 = 0.5;
const ASSIGNMENTS_WEIGHT: f64 = 0.2;

/// 计算考勤百分比：round(100 * attended / total)，total 为 0 时返回 0
pub fn attendance_percentage(total_classes: u32, attended_classes: u32) -> u32 {
    if total_classes == 0 {
        return 0;
    }
    (100.0 * attended_classes as f64 / total_classes as f64).round() as u32
}

/// 计算加权总分
pub fn total_marks(midterm: f64, final_exam: f64, assignments: f64) -> u32 {
    (midterm * MIDTERM_WEIGHT + final_exam * FINAL_WEIGHT + assignments * ASSIGNMENTS_WEIGHT)
        .round() as u32
}

/// 总分到等级的映射，各区间下界包含
pub fn letter_grade(total: u32) -> &'static str {
    match total {
        90.. => "A+",
        85..=89 => "A",
        80..=84 => "A-",
        75..=79 => "B+",
        70..=74 => "B",
        65..=69 => "B-",
        60..=64 => "C+",
        55..=59 => "C",
        50..=54 => "C-",
        45..=49 => "D+",
        40..=44 => "D",
        _ => "F",
    }
}
