use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogWarning {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentItem {
    pub pick: i64,
    pub id: String,
    pub partner: String,
    pub restaurant: String,
    pub address: String,
    pub city: String,
    pub method: String,
    pub wave: String,
    pub display: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FindData {
    pub query: String,
    pub data_dir: String,
    pub total: i64,
    pub rows: Vec<AssignmentItem>,
    pub warnings: Vec<CatalogWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowData {
    pub query: String,
    pub assignment: AssignmentItem,
    pub text_source: String,
    pub delivery_service: String,
    pub rendered: String,
    pub warnings: Vec<CatalogWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoneData {
    pub action: String,
    pub key: String,
    pub partner: String,
    pub restaurant: String,
    pub method: String,
    pub completed: bool,
    pub mirrored: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoneRecord {
    pub key: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoneListData {
    pub rows: Vec<DoneRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogFileStatus {
    pub file: String,
    pub present: bool,
    pub rows: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStatusData {
    pub data_dir: String,
    pub files: Vec<CatalogFileStatus>,
    pub warnings: Vec<CatalogWarning>,
}
