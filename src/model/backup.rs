use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BackupDto {
    /// Directory name, formatted `yyyy_MM_dd_HH_mm_ss_SSS`.
    pub id: String,
    pub date: String,
    pub version: i32,
}
