use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "progress_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub project_id: i32,
    pub log_date: DateTimeWithTimeZone,
    pub activity_type: ActivityType,
    pub content: String,
    pub next_action: Option<String>,
    pub created_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
pub enum ActivityType {
    #[sea_orm(string_value = "meeting")]
    Meeting,
    #[sea_orm(string_value = "phone")]
    Phone,
    #[sea_orm(string_value = "email")]
    Email,
    #[sea_orm(string_value = "proposal")]
    Proposal,
    #[sea_orm(string_value = "quotation")]
    Quotation,
    #[sea_orm(string_value = "presentation")]
    Presentation,
    #[sea_orm(string_value = "other")]
    Other,
}

impl ActivityType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Meeting => "meeting",
            ActivityType::Phone => "phone",
            ActivityType::Email => "email",
            ActivityType::Proposal => "proposal",
            ActivityType::Quotation => "quotation",
            ActivityType::Presentation => "presentation",
            ActivityType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Meeting => "打ち合わせ",
            ActivityType::Phone => "電話",
            ActivityType::Email => "メール",
            ActivityType::Proposal => "提案作成",
            ActivityType::Quotation => "見積作成",
            ActivityType::Presentation => "プレゼン",
            ActivityType::Other => "その他",
        }
    }
}

/// Fallback recorder name when the caller does not supply one.
pub const DEFAULT_CREATED_BY: &str = "担当者";

impl ActiveModelBehavior for ActiveModel {}
