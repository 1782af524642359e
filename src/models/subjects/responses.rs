use serde::Serialize;

use super::entities::Subject;

// 科目列表响应
#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub subjects: Vec<Subject>,
}
