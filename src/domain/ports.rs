use crate::utils::error::Result;
use std::time::SystemTime;

/// 檔案層級的中繼資料，供狀態回報使用
#[derive(Debug, Clone)]
pub struct FileStat {
    pub size: u64,
    pub modified: Option<SystemTime>,
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// 回傳 None 表示檔案不存在
    fn metadata(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<FileStat>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn data_dir(&self) -> &str;
    fn public_url(&self) -> Option<&str>;
    fn monitor_enabled(&self) -> bool;
}
