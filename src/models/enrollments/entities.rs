use serde::{Deserialize, Serialize};

use crate::utils::grading;

// 学业数据分区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcademicSection {
    Attendance,
    Marks,
    Clos,
    Plos,
}

impl std::str::FromStr for AcademicSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attendance" => Ok(AcademicSection::Attendance),
            "marks" => Ok(AcademicSection::Marks),
            "clos" => Ok(AcademicSection::Clos),
            "plos" => Ok(AcademicSection::Plos),
            _ => Err(format!(
                "Invalid data type: '{s}'. Supported: attendance, marks, clos, plos"
            )),
        }
    }
}

impl std::fmt::Display for AcademicSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcademicSection::Attendance => write!(f, "attendance"),
            AcademicSection::Marks => write!(f, "marks"),
            AcademicSection::Clos => write!(f, "clos"),
            AcademicSection::Plos => write!(f, "plos"),
        }
    }
}

// 考勤子文档
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub total_classes: u32,
    pub attended_classes: u32,
    /// 派生字段，合并后由服务端重算
    pub percentage: u32,
}

// 成绩子文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarksRecord {
    pub midterm: f64,
    #[serde(rename = "final")]
    pub final_exam: f64,
    pub assignments: f64,
    /// 派生字段：round(0.3*midterm + 0.5*final + 0.2*assignments)
    pub total: u32,
    /// 派生字段，由 total 映射
    pub grade: String,
}

impl Default for MarksRecord {
    fn default() -> Self {
        Self {
            midterm: 0.0,
            final_exam: 0.0,
            assignments: 0.0,
            total: 0,
            grade: "N/A".to_string(),
        }
    }
}

// 课程学习成果分数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloScores {
    pub clo1: f64,
    pub clo2: f64,
    pub clo3: f64,
    pub clo4: f64,
}

// 专业学习成果分数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PloScores {
    pub plo1: f64,
    pub plo2: f64,
    pub plo3: f64,
    pub plo4: f64,
}

// 选课记录：绑定一个学生、一个科目和创建它的教职工
//
// 唯一键是 (student_roll, subject_id) 组合。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_roll: String,
    pub subject_id: String,
    pub faculty_id: String,
    pub enrollment_date: chrono::NaiveDate,
    pub attendance: AttendanceRecord,
    pub marks: MarksRecord,
    pub clos: CloScores,
    pub plos: PloScores,
}

impl Enrollment {
    /// 创建四个子文档全部零值初始化的新选课记录
    pub fn new(student_roll: String, subject_id: String, faculty_id: String) -> Self {
        Self {
            student_roll,
            subject_id,
            faculty_id,
            enrollment_date: chrono::Utc::now().date_naive(),
            attendance: AttendanceRecord::default(),
            marks: MarksRecord::default(),
            clos: CloScores::default(),
            plos: PloScores::default(),
        }
    }

    /// 将字段映射合并进指定分区
    ///
    /// 只接受该分区已知的数值字段，未知键静默忽略。
    /// 合并后重算派生字段（percentage / total / grade），
    /// 客户端提交的派生值不被信任。
    pub fn apply_section_update(
        &mut self,
        section: AcademicSection,
        fields: &serde_json::Map<String, serde_json::Value>,
    ) {
        let number = |key: &str| fields.get(key).and_then(|v| v.as_f64());

        match section {
            AcademicSection::Attendance => {
                if let Some(v) = number("total_classes") {
                    self.attendance.total_classes = v.max(0.0) as u32;
                }
                if let Some(v) = number("attended_classes") {
                    self.attendance.attended_classes = v.max(0.0) as u32;
                }
                self.attendance.percentage = grading::attendance_percentage(
                    self.attendance.total_classes,
                    self.attendance.attended_classes,
                );
            }
            AcademicSection::Marks => {
                if let Some(v) = number("midterm") {
                    self.marks.midterm = v;
                }
                if let Some(v) = number("final") {
                    self.marks.final_exam = v;
                }
                if let Some(v) = number("assignments") {
                    self.marks.assignments = v;
                }
                self.marks.total = grading::total_marks(
                    self.marks.midterm,
                    self.marks.final_exam,
                    self.marks.assignments,
                );
                self.marks.grade = grading::letter_grade(self.marks.total).to_string();
            }
            AcademicSection::Clos => {
                if let Some(v) = number("clo1") {
                    self.clos.clo1 = v;
                }
                if let Some(v) = number("clo2") {
                    self.clos.clo2 = v;
                }
                if let Some(v) = number("clo3") {
                    self.clos.clo3 = v;
                }
                if let Some(v) = number("clo4") {
                    self.clos.clo4 = v;
                }
            }
            AcademicSection::Plos => {
                if let Some(v) = number("plo1") {
                    self.plos.plo1 = v;
                }
                if let Some(v) = number("plo2") {
                    self.plos.plo2 = v;
                }
                if let Some(v) = number("plo3") {
                    self.plos.plo3 = v;
                }
                if let Some(v) = number("plo4") {
                    self.plos.plo4 = v;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().expect("object").clone()
    }

    #[test]
    fn test_new_enrollment_zero_initialized() {
        let e = Enrollment::new("FA21-BCS-001".into(), "CS101".into(), "FAC1".into());
        assert_eq!(e.attendance.total_classes, 0);
        assert_eq!(e.attendance.percentage, 0);
        assert_eq!(e.marks.total, 0);
        assert_eq!(e.marks.grade, "N/A");
        assert_eq!(e.clos.clo1, 0.0);
        assert_eq!(e.plos.plo4, 0.0);
    }

    #[test]
    fn test_attendance_merge_recomputes_percentage() {
        let mut e = Enrollment::new("r".into(), "s".into(), "f".into());
        e.apply_section_update(
            AcademicSection::Attendance,
            &fields(json!({"total_classes": 3, "attended_classes": 2, "percentage": 5})),
        );
        assert_eq!(e.attendance.total_classes, 3);
        assert_eq!(e.attendance.attended_classes, 2);
        // 客户端提交的 percentage=5 被丢弃，服务端重算为 67
        assert_eq!(e.attendance.percentage, 67);
    }

    #[test]
    fn test_marks_merge_recomputes_total_and_grade() {
        let mut e = Enrollment::new("r".into(), "s".into(), "f".into());
        e.apply_section_update(
            AcademicSection::Marks,
            &fields(json!({"midterm": 80, "final": 80, "assignments": 80, "grade": "A+"})),
        );
        assert_eq!(e.marks.total, 80);
        assert_eq!(e.marks.grade, "A-");
    }

    #[test]
    fn test_partial_marks_merge_keeps_other_fields() {
        let mut e = Enrollment::new("r".into(), "s".into(), "f".into());
        e.apply_section_update(
            AcademicSection::Marks,
            &fields(json!({"midterm": 100, "final": 100, "assignments": 100})),
        );
        e.apply_section_update(AcademicSection::Marks, &fields(json!({"midterm": 50})));
        assert_eq!(e.marks.midterm, 50.0);
        assert_eq!(e.marks.final_exam, 100.0);
        // round(15 + 50 + 20) = 85
        assert_eq!(e.marks.total, 85);
        assert_eq!(e.marks.grade, "A");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut e = Enrollment::new("r".into(), "s".into(), "f".into());
        e.apply_section_update(
            AcademicSection::Clos,
            &fields(json!({"clo1": 75.5, "clo9": 10, "bogus": "x"})),
        );
        assert_eq!(e.clos.clo1, 75.5);
        assert_eq!(e.clos.clo2, 0.0);
    }

    #[test]
    fn test_section_from_str() {
        use std::str::FromStr;
        assert_eq!(
            AcademicSection::from_str("attendance").unwrap(),
            AcademicSection::Attendance
        );
        assert_eq!(
            AcademicSection::from_str("plos").unwrap(),
            AcademicSection::Plos
        );
        assert!(AcademicSection::from_str("grades").is_err());
    }

    #[test]
    fn test_marks_serialize_final_field_name() {
        let e = Enrollment::new("r".into(), "s".into(), "f".into());
        let json = serde_json::to_value(&e).expect("serialize");
        assert!(json["marks"].get("final").is_some());
        assert!(json["marks"].get("final_exam").is_none());
    }
}
