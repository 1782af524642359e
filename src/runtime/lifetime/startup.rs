use crate::models::subjects::entities::Subject;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 预置科目目录
///
/// 科目通过 API 只读，目录文件缺失时在首次启动写入一次。
fn default_subject_catalog() -> Vec<Subject> {
    let subject = |id: &str, name: &str, code: &str, credit_hours: u32, semester: i32| Subject {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        credit_hours,
        department: "Computer Science".to_string(),
        semester,
    };

    vec![
        subject("CS101", "Programming Fundamentals", "CS-101", 4, 1),
        subject("CS102", "Object Oriented Programming", "CS-102", 4, 2),
        subject("CS201", "Data Structures and Algorithms", "CS-201", 4, 3),
        subject("CS202", "Computer Organization", "CS-202", 3, 3),
        subject("CS301", "Database Systems", "CS-301", 4, 5),
        subject("CS302", "Operating Systems", "CS-302", 3, 5),
        subject("CS303", "Computer Networks", "CS-303", 3, 6),
        subject("CS401", "Software Engineering", "CS-401", 3, 7),
        subject("CS402", "Artificial Intelligence", "CS-402", 3, 7),
    ]
}

/// 首次运行时写入科目目录
async fn seed_subjects(storage: &Arc<dyn Storage>) {
    match storage.seed_subjects(default_subject_catalog()).await {
        Ok(true) => info!("Subject catalog seeded"),
        Ok(false) => {}
        Err(e) => warn!("Failed to seed subject catalog: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化和科目目录预置
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized");

    // 预置科目目录（文件已存在则跳过）
    seed_subjects(&storage).await;

    StartupContext { storage }
}
