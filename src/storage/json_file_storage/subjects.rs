use super::JsonFileStorage;
use super::collection::StoredRecord;
use crate::errors::Result;
use crate::models::subjects::entities::Subject;

impl StoredRecord for Subject {
    fn key(&self) -> String {
        self.id.clone()
    }
}

impl JsonFileStorage {
    /// 列出科目目录
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        self.subjects.load_all().await
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: &str) -> Result<Option<Subject>> {
        self.subjects.find_by_key(id).await
    }

    /// 首次运行时写入预置科目目录
    ///
    /// 目录文件已存在时不做任何事，返回 false。
    pub async fn seed_subjects_impl(&self, subjects: Vec<Subject>) -> Result<bool> {
        if self.subjects.exists().await {
            return Ok(false);
        }
        self.subjects.save_all(&subjects).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_storage(tag: &str) -> (JsonFileStorage, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "acadportal-subjects-{tag}-{}",
            uuid::Uuid::new_v4().simple()
        ));
        let storage = JsonFileStorage::new_with_dir(&dir).await.expect("storage");
        (storage, dir)
    }

    fn subject(id: &str) -> Subject {
        Subject {
            id: id.to_string(),
            name: "Programming Fundamentals".to_string(),
            code: id.to_string(),
            credit_hours: 3,
            department: "CS".to_string(),
            semester: 1,
        }
    }

    #[tokio::test]
    async fn test_seed_only_once() {
        let (storage, dir) = temp_storage("seed").await;

        let seeded = storage
            .seed_subjects_impl(vec![subject("CS101"), subject("CS102")])
            .await
            .expect("seed");
        assert!(seeded);

        // 第二次种子不覆盖现有目录
        let seeded_again = storage
            .seed_subjects_impl(vec![subject("EE101")])
            .await
            .expect("seed again");
        assert!(!seeded_again);

        let subjects = storage.list_subjects_impl().await.expect("list");
        assert_eq!(subjects.len(), 2);
        assert!(
            storage
                .get_subject_by_id_impl("CS101")
                .await
                .expect("get")
                .is_some()
        );
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
}
