//! 平面文件集合存储
//!
//! 每个集合对应磁盘上的一个 JSON 数组文件。所有处理器重复的
//! 读取-扫描-变更-回写循环在这里集中实现一次：
//!
//! - 文件缺失视为空集合（首次运行引导）；
//! - 文件损坏会被隔离改名并记录错误，而不是静默当作空集合，
//!   避免下一次全量回写截断真实数据；
//! - 回写先写入临时文件再原子改名覆盖目标；
//! - 每个集合持有自己的互斥锁，读-改-写循环串行化，
//!   单写者假设由此真正成立。

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::errors::{PortalError, Result};

/// 可持久化到 JSON 集合中的记录
pub trait StoredRecord: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// 集合内的唯一键；字符串键的比较忽略 ASCII 大小写
    fn key(&self) -> String;
}

/// 判断两个键是否相等（忽略 ASCII 大小写）
pub fn key_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

pub struct JsonCollection<R: StoredRecord> {
    name: &'static str,
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> R>,
}

impl<R: StoredRecord> JsonCollection<R> {
    pub fn new(name: &'static str, data_dir: &Path) -> Self {
        Self {
            name,
            path: data_dir.join(format!("{name}.json")),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 文件是否已存在（用于首次运行的种子判断）
    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// 读取全部记录的快照
    pub async fn load_all(&self) -> Result<Vec<R>> {
        let _guard = self.lock.lock().await;
        self.read_records().await
    }

    /// 全量回写记录序列
    pub async fn save_all(&self, records: &[R]) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.write_records(records).await
    }

    /// 按键查找记录
    pub async fn find_by_key(&self, key: &str) -> Result<Option<R>> {
        let records = self.load_all().await?;
        Ok(records.into_iter().find(|r| key_eq(&r.key(), key)))
    }

    /// 追加一条记录；键已存在时返回 Conflict
    pub async fn insert(&self, record: R) -> Result<R> {
        let name = self.name;
        self.mutate(move |records| {
            let key = record.key();
            if records.iter().any(|r| key_eq(&r.key(), &key)) {
                return Err(PortalError::conflict(format!(
                    "duplicate key '{key}' in '{name}' collection"
                )));
            }
            records.push(record.clone());
            Ok(record)
        })
        .await
    }

    /// 定位并修改一条记录；键不存在时返回 NotFound
    pub async fn update<F>(&self, key: &str, mutator: F) -> Result<R>
    where
        F: FnOnce(&mut R) + Send,
    {
        let name = self.name;
        self.mutate(|records| match records.iter_mut().find(|r| key_eq(&r.key(), key)) {
            Some(record) => {
                mutator(record);
                Ok(record.clone())
            }
            None => Err(PortalError::not_found(format!(
                "key '{key}' not found in '{name}' collection"
            ))),
        })
        .await
    }

    /// 删除匹配键的记录，剩余序列保持连续；无匹配时返回 NotFound
    pub async fn delete(&self, key: &str) -> Result<R> {
        let name = self.name;
        self.mutate(|records| {
            match records.iter().position(|r| key_eq(&r.key(), key)) {
                Some(index) => Ok(records.remove(index)),
                None => Err(PortalError::not_found(format!(
                    "key '{key}' not found in '{name}' collection"
                ))),
            }
        })
        .await
    }

    /// 通用的读-改-写循环，整个过程持有集合锁
    ///
    /// 闭包返回 Err 时不回写，集合保持原状。
    pub async fn mutate<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<R>) -> Result<T> + Send,
    {
        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;
        let result = f(&mut records)?;
        self.write_records(&records).await?;
        Ok(result)
    }

    async fn read_records(&self) -> Result<Vec<R>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // 文件缺失 => 空集合
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PortalError::persistence(format!(
                    "failed to read collection '{}': {e}",
                    self.name
                )));
            }
        };

        match serde_json::from_slice::<Vec<R>>(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => {
                // 损坏的文件隔离改名，原始字节保留在磁盘上，
                // 后续回写不会再截断它
                let quarantine = self.quarantine_path();
                error!(
                    "Collection '{}' is corrupt ({}), quarantining to {}",
                    self.name,
                    e,
                    quarantine.display()
                );
                tokio::fs::rename(&self.path, &quarantine)
                    .await
                    .map_err(|rename_err| {
                        PortalError::persistence(format!(
                            "failed to quarantine corrupt collection '{}': {rename_err}",
                            self.name
                        ))
                    })?;
                warn!(
                    "Collection '{}' reset to empty after quarantine",
                    self.name
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_records(&self, records: &[R]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                PortalError::persistence(format!(
                    "failed to create data directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let json = serde_json::to_vec_pretty(records)?;
        let tmp_path = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp_path, &json).await.map_err(|e| {
            PortalError::persistence(format!(
                "failed to write collection '{}': {e}",
                self.name
            ))
        })?;
        // 同目录原子改名，读者看不到半写状态
        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            PortalError::persistence(format!(
                "failed to replace collection '{}': {e}",
                self.name
            ))
        })?;
        Ok(())
    }

    fn quarantine_path(&self) -> PathBuf {
        self.path.with_extension(format!(
            "corrupt-{}.json",
            chrono::Utc::now().timestamp()
        ))
    }
}
