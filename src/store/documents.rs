use crate::domain::model::{Project, ProjectDraft, ProjectList, SiteContent, Theme};
use crate::domain::ports::{FileStat, Storage};
use crate::utils::error::{FolioError, Result};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;

pub const CONTENT_FILE: &str = "content.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const THEME_FILE: &str = "theme.json";

pub const DOCUMENT_FILES: [&str; 3] = [CONTENT_FILE, PROJECTS_FILE, THEME_FILE];

/// 單一文件的現況,供狀態端點回報。
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub name: &'static str,
    pub stat: Option<FileStat>,
}

/// 三份 JSON 文件的型別化存取層。
///
/// 每份文件各有一把非同步鎖,所有讀改寫都在鎖內完成,
/// 因此同文件的併發修改會序列化 (例如兩個同時的新增不會配到同一個 id)。
pub struct DocumentStore<S: Storage> {
    storage: S,
    content_lock: Mutex<()>,
    projects_lock: Mutex<()>,
    theme_lock: Mutex<()>,
}

impl<S: Storage> DocumentStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            content_lock: Mutex::new(()),
            projects_lock: Mutex::new(()),
            theme_lock: Mutex::new(()),
        }
    }

    async fn load_doc<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let bytes = self.storage.read_file(name).await?;
        serde_json::from_slice(&bytes).map_err(|e| FolioError::DocumentError {
            name: name.to_string(),
            reason: format!("invalid JSON: {}", e),
        })
    }

    async fn save_doc<T: Serialize>(&self, name: &str, doc: &T) -> Result<()> {
        // 兩空格縮排,和前端編輯器存檔的格式一致
        let bytes = serde_json::to_vec_pretty(doc)?;
        self.storage.write_file(name, &bytes).await
    }

    pub async fn load_content(&self) -> Result<SiteContent> {
        let _guard = self.content_lock.lock().await;
        self.load_doc(CONTENT_FILE).await
    }

    pub async fn save_content(&self, content: &SiteContent) -> Result<()> {
        let _guard = self.content_lock.lock().await;
        self.save_doc(CONTENT_FILE, content).await
    }

    pub async fn load_theme(&self) -> Result<Theme> {
        let _guard = self.theme_lock.lock().await;
        self.load_doc(THEME_FILE).await
    }

    pub async fn save_theme(&self, theme: &Theme) -> Result<()> {
        let _guard = self.theme_lock.lock().await;
        self.save_doc(THEME_FILE, theme).await
    }

    pub async fn load_projects(&self) -> Result<ProjectList> {
        let _guard = self.projects_lock.lock().await;
        self.load_doc(PROJECTS_FILE).await
    }

    /// 新增專案並配發 id:取現有 id 最大值 (至少 0) 加一。
    /// 刪掉最大 id 後再新增會重用該 id。
    pub async fn add_project(&self, draft: ProjectDraft) -> Result<Project> {
        let _guard = self.projects_lock.lock().await;
        let mut list: ProjectList = self.load_doc(PROJECTS_FILE).await?;

        let next_id = list.projects.iter().map(|p| p.id).fold(0, i64::max) + 1;
        let project = draft.into_project(next_id);

        list.projects.push(project.clone());
        self.save_doc(PROJECTS_FILE, &list).await?;

        Ok(project)
    }

    /// 以 id 整筆替換。找不到時不動檔案,回報 ProjectNotFound。
    pub async fn replace_project(&self, project: Project) -> Result<Project> {
        let _guard = self.projects_lock.lock().await;
        let mut list: ProjectList = self.load_doc(PROJECTS_FILE).await?;

        let slot = list
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or(FolioError::ProjectNotFound { id: project.id })?;
        *slot = project.clone();

        self.save_doc(PROJECTS_FILE, &list).await?;

        Ok(project)
    }

    /// 移除指定 id 的專案。id 不存在也算成功 (過濾後原樣寫回)。
    pub async fn remove_project(&self, id: i64) -> Result<()> {
        let _guard = self.projects_lock.lock().await;
        let mut list: ProjectList = self.load_doc(PROJECTS_FILE).await?;

        list.projects.retain(|p| p.id != id);
        self.save_doc(PROJECTS_FILE, &list).await
    }

    /// 補齊缺漏的文件:不存在的以預設值寫入,已存在的絕不覆蓋。
    /// 回傳這次實際建立的檔名。
    pub async fn seed_missing(&self) -> Result<Vec<&'static str>> {
        let mut seeded = Vec::new();

        if self.storage.metadata(CONTENT_FILE).await?.is_none() {
            let _guard = self.content_lock.lock().await;
            self.save_doc(CONTENT_FILE, &SiteContent::default()).await?;
            seeded.push(CONTENT_FILE);
        }

        if self.storage.metadata(PROJECTS_FILE).await?.is_none() {
            let _guard = self.projects_lock.lock().await;
            self.save_doc(PROJECTS_FILE, &ProjectList::default()).await?;
            seeded.push(PROJECTS_FILE);
        }

        if self.storage.metadata(THEME_FILE).await?.is_none() {
            let _guard = self.theme_lock.lock().await;
            self.save_doc(THEME_FILE, &Theme::default()).await?;
            seeded.push(THEME_FILE);
        }

        Ok(seeded)
    }

    pub async fn document_stats(&self) -> Result<Vec<DocumentInfo>> {
        let mut stats = Vec::with_capacity(DOCUMENT_FILES.len());
        for name in DOCUMENT_FILES {
            stats.push(DocumentInfo {
                name,
                stat: self.storage.metadata(name).await?,
            });
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let data = {
                let files = self.files.lock().await;
                files.get(path).cloned()
            };
            // 讀完先讓出,讓並發測試像真實 IO 一樣交錯
            tokio::task::yield_now().await;
            data.ok_or_else(|| {
                FolioError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        async fn metadata(&self, path: &str) -> Result<Option<FileStat>> {
            let files = self.files.lock().await;
            Ok(files.get(path).map(|data| FileStat {
                size: data.len() as u64,
                modified: None,
            }))
        }
    }

    async fn seeded_store() -> DocumentStore<MockStorage> {
        let store = DocumentStore::new(MockStorage::new());
        store.seed_missing().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_seed_missing_creates_all_documents() {
        let store = DocumentStore::new(MockStorage::new());

        let seeded = store.seed_missing().await.unwrap();
        assert_eq!(seeded, vec![CONTENT_FILE, PROJECTS_FILE, THEME_FILE]);

        let content = store.load_content().await.unwrap();
        assert_eq!(content.about.name, "Sandhya Thapa");
        let projects = store.load_projects().await.unwrap();
        assert_eq!(projects.projects.len(), 3);
    }

    #[tokio::test]
    async fn test_seed_missing_never_overwrites_existing() {
        let storage = MockStorage::new();
        storage
            .put_file(CONTENT_FILE, br#"{"hero":{"description":"custom"}}"#)
            .await;

        let store = DocumentStore::new(storage);
        let seeded = store.seed_missing().await.unwrap();

        // content.json 已存在,只補另外兩份
        assert_eq!(seeded, vec![PROJECTS_FILE, THEME_FILE]);
        let content = store.load_content().await.unwrap();
        assert_eq!(content.hero.description, "custom");
    }

    #[tokio::test]
    async fn test_saved_documents_are_pretty_printed() {
        let store = seeded_store().await;
        let raw = store.storage.get_file(THEME_FILE).await.unwrap();
        let text = String::from_utf8(raw).unwrap();

        assert!(text.starts_with("{\n  \"colors\""));
    }

    #[tokio::test]
    async fn test_content_save_then_load_roundtrip() {
        let store = seeded_store().await;

        let mut content = store.load_content().await.unwrap();
        content.hero.title.part1 = "Hello".to_string();
        content.footer.copyright = "© 2026".to_string();
        store.save_content(&content).await.unwrap();

        let reloaded = store.load_content().await.unwrap();
        assert_eq!(
            serde_json::to_value(&reloaded).unwrap(),
            serde_json::to_value(&content).unwrap()
        );
    }

    #[tokio::test]
    async fn test_add_project_allocates_max_plus_one() {
        let store = seeded_store().await;

        let draft = ProjectDraft {
            title: "Water Treatment Plant".to_string(),
            ..ProjectDraft::default()
        };
        let created = store.add_project(draft).await.unwrap();

        assert_eq!(created.id, 4);
        let list = store.load_projects().await.unwrap();
        assert_eq!(list.projects.len(), 4);
    }

    #[tokio::test]
    async fn test_add_project_reuses_id_after_deleting_highest() {
        let store = seeded_store().await;

        store.remove_project(3).await.unwrap();
        let created = store.add_project(ProjectDraft::default()).await.unwrap();

        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn test_add_project_on_empty_list_starts_at_one() {
        let store = seeded_store().await;
        for id in [1, 2, 3] {
            store.remove_project(id).await.unwrap();
        }

        let created = store.add_project(ProjectDraft::default()).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_allocate_distinct_ids() {
        let store = seeded_store().await;

        // 沒有鎖的話,兩邊會同時讀到 max id 3 而配出同一個 id
        let (a, b) = tokio::join!(
            store.add_project(ProjectDraft::default()),
            store.add_project(ProjectDraft::default()),
        );
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a.id, b.id);
        let list = store.load_projects().await.unwrap();
        assert_eq!(list.projects.len(), 5);
    }

    #[tokio::test]
    async fn test_replace_project_swaps_matching_id() {
        let store = seeded_store().await;

        let updated = Project {
            id: 2,
            title: "Rebuilt Bridge".to_string(),
            ..Project::default()
        };
        let returned = store.replace_project(updated).await.unwrap();
        assert_eq!(returned.title, "Rebuilt Bridge");

        let list = store.load_projects().await.unwrap();
        let stored = list.projects.iter().find(|p| p.id == 2).unwrap();
        assert_eq!(stored.title, "Rebuilt Bridge");
        assert_eq!(list.projects.len(), 3);
    }

    #[tokio::test]
    async fn test_replace_unknown_project_leaves_file_untouched() {
        let store = seeded_store().await;
        let before = store.storage.get_file(PROJECTS_FILE).await.unwrap();

        let missing = Project {
            id: 99,
            ..Project::default()
        };
        let err = store.replace_project(missing).await.unwrap_err();
        assert!(matches!(err, FolioError::ProjectNotFound { id: 99 }));

        let after = store.storage.get_file(PROJECTS_FILE).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_remove_project_deletes_exactly_that_id() {
        let store = seeded_store().await;

        store.remove_project(2).await.unwrap();

        let list = store.load_projects().await.unwrap();
        let ids: Vec<i64> = list.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_remove_absent_project_succeeds() {
        let store = seeded_store().await;

        store.remove_project(42).await.unwrap();

        let list = store.load_projects().await.unwrap();
        assert_eq!(list.projects.len(), 3);
    }

    #[tokio::test]
    async fn test_corrupt_document_reports_its_name() {
        let storage = MockStorage::new();
        storage.put_file(CONTENT_FILE, b"not json at all").await;

        let store = DocumentStore::new(storage);
        let err = store.load_content().await.unwrap_err();

        match err {
            FolioError::DocumentError { name, .. } => assert_eq!(name, CONTENT_FILE),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_document_stats_covers_all_files() {
        let store = seeded_store().await;

        let stats = store.document_stats().await.unwrap();
        assert_eq!(stats.len(), 3);
        assert!(stats.iter().all(|info| info.stat.is_some()));
    }
}
