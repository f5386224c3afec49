use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "handover")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub project_id: i32,
    pub handover_type: Kind,
    pub handover_to: String,
    pub handover_date: DateTimeWithTimeZone,
    pub handover_content: String,
    pub technical_requirements: Option<String>,
    pub notes: Option<String>,
    pub is_completed: bool,
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
pub enum Kind {
    #[sea_orm(string_value = "staff_a")]
    StaffA,
    #[sea_orm(string_value = "staff_b")]
    StaffB,
    #[sea_orm(string_value = "other_engineer")]
    OtherEngineer,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::StaffA => "staff_a",
            Kind::StaffB => "staff_b",
            Kind::OtherEngineer => "other_engineer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Kind::StaffA => "スタッフAへの引継ぎ",
            Kind::StaffB => "スタッフBへの引継ぎ",
            Kind::OtherEngineer => "その他エンジニアへの引継ぎ",
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
