use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub client_id: i32,
    pub title: String,
    pub status: Status,
    pub consultation_content: Option<String>,
    pub proposal_content: Option<String>,
    pub estimated_amount: Option<i64>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(has_many = "super::handover::Entity")]
    Handover,
    #[sea_orm(has_many = "super::progress_log::Entity")]
    ProgressLog,
    #[sea_orm(has_many = "super::engineer_handoff::Entity")]
    EngineerHandoff,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::handover::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Handover.def()
    }
}

impl Related<super::progress_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgressLog.def()
    }
}

impl Related<super::engineer_handoff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EngineerHandoff.def()
    }
}

/// Engagement pipeline status. Stored as a closed enum; display labels match
/// the product's Japanese UI wording.
#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "project_status")]
pub enum Status {
    #[sea_orm(string_value = "inquiry")]
    Inquiry,
    #[sea_orm(string_value = "hearing")]
    Hearing,
    #[sea_orm(string_value = "proposal")]
    Proposal,
    #[sea_orm(string_value = "quotation")]
    Quotation,
    #[sea_orm(string_value = "negotiation")]
    Negotiation,
    #[sea_orm(string_value = "handover")]
    Handover,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "on_hold")]
    OnHold,
    #[sea_orm(string_value = "lost")]
    Lost,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Inquiry => "inquiry",
            Status::Hearing => "hearing",
            Status::Proposal => "proposal",
            Status::Quotation => "quotation",
            Status::Negotiation => "negotiation",
            Status::Handover => "handover",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::OnHold => "on_hold",
            Status::Lost => "lost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Inquiry => "初回相談",
            Status::Hearing => "ヒアリング中",
            Status::Proposal => "提案作成中",
            Status::Quotation => "見積提示",
            Status::Negotiation => "商談中",
            Status::Handover => "エンジニア引継ぎ",
            Status::InProgress => "実施中",
            Status::Completed => "完了",
            Status::OnHold => "保留",
            Status::Lost => "失注",
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
