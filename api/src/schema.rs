use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, Enum, Error, ErrorExtensions, InputObject, Object, Schema,
    SimpleObject,
};
use chrono::{DateTime, NaiveDate, Utc};
use entity::{client, engineer_handoff, handover, progress_log, project};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    DatabaseConnection, DbErr, EntityTrait,
};
use tracing::info_span;

use crate::error::RecordError;
use crate::reports::{self, ClientWithProjects, DashboardSummary, ProjectDetail, StatusCount};

pub struct AppSchema(pub Schema<QueryRoot, MutationRoot, EmptySubscription>);

pub fn build_schema(db: Arc<DatabaseConnection>) -> AppSchema {
    let schema = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish();
    AppSchema(schema)
}

pub struct QueryRoot;
pub struct MutationRoot;

#[Object]
impl QueryRoot {
    async fn crm(&self) -> CrmQuery {
        CrmQuery
    }
}

#[Object]
impl MutationRoot {
    async fn crm(&self) -> CrmMutation {
        CrmMutation
    }
}

#[derive(Default)]
pub struct CrmQuery;

#[derive(Default)]
pub struct CrmMutation;

#[Object]
impl CrmQuery {
    async fn dashboard(&self, ctx: &Context<'_>) -> async_graphql::Result<DashboardNode> {
        let db = database(ctx)?;
        let summary = reports::dashboard_summary(db.as_ref(), Utc::now())
            .await
            .map_err(record_error)?;
        Ok(summary.into())
    }

    async fn projects(
        &self,
        ctx: &Context<'_>,
        status: Option<ProjectStatus>,
        search: Option<String>,
    ) -> async_graphql::Result<Vec<ProjectNode>> {
        let db = database(ctx)?;
        let rows = reports::list_projects(
            db.as_ref(),
            status.map(project::Status::from),
            search.as_deref(),
        )
        .await
        .map_err(record_error)?;
        Ok(rows.into_iter().map(ProjectNode::from).collect())
    }

    async fn project(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> async_graphql::Result<ProjectDetailNode> {
        let db = database(ctx)?;
        let detail = reports::project_detail(db.as_ref(), id)
            .await
            .map_err(record_error)?;
        Ok(detail.into())
    }

    async fn clients(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
    ) -> async_graphql::Result<Vec<ClientSummaryNode>> {
        let db = database(ctx)?;
        let rows = reports::list_clients(db.as_ref(), search.as_deref())
            .await
            .map_err(record_error)?;
        Ok(rows.into_iter().map(ClientSummaryNode::from).collect())
    }

    async fn handovers(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "type")] kind: Option<HandoverKind>,
        status: Option<String>,
    ) -> async_graphql::Result<Vec<HandoverNode>> {
        let db = database(ctx)?;
        let rows = reports::list_handovers(
            db.as_ref(),
            kind.map(handover::Kind::from),
            status.as_deref(),
        )
        .await
        .map_err(record_error)?;
        Ok(rows.into_iter().map(HandoverNode::from).collect())
    }

    #[graphql(name = "engineerHandoffs")]
    async fn engineer_handoffs(
        &self,
        ctx: &Context<'_>,
        status: Option<String>,
    ) -> async_graphql::Result<Vec<EngineerHandoffNode>> {
        let db = database(ctx)?;
        let rows = reports::list_engineer_handoffs(db.as_ref(), status.as_deref())
            .await
            .map_err(record_error)?;
        Ok(rows.into_iter().map(EngineerHandoffNode::from).collect())
    }
}

#[Object]
impl CrmMutation {
    #[graphql(name = "createClient")]
    async fn create_client(
        &self,
        ctx: &Context<'_>,
        input: NewClientInput,
    ) -> async_graphql::Result<ClientNode> {
        let db = database(ctx)?;
        let now: DateTimeWithTimeZone = Utc::now().into();
        let created = client::ActiveModel {
            id: NotSet,
            company_name: Set(input.company_name),
            contact_person: Set(input.contact_person),
            email: Set(input.email),
            phone: Set(input.phone),
            industry: Set(input.industry),
            company_size: Set(input.company_size),
            created_at: Set(now),
        }
        .insert(db.as_ref())
        .await
        .map_err(db_error)?;
        Ok(created.into())
    }

    #[graphql(name = "updateClient")]
    async fn update_client(
        &self,
        ctx: &Context<'_>,
        input: UpdateClientInput,
    ) -> async_graphql::Result<ClientNode> {
        let db = database(ctx)?;
        let model = client::Entity::find_by_id(input.id)
            .one(db.as_ref())
            .await
            .map_err(db_error)?
            .ok_or_else(|| {
                record_error(RecordError::NotFound {
                    entity: "client",
                    id: input.id,
                })
            })?;
        let mut active: client::ActiveModel = model.into();
        if let Some(company_name) = input.company_name {
            active.company_name = Set(company_name);
        }
        if let Some(contact_person) = input.contact_person {
            active.contact_person = Set(contact_person);
        }
        if let Some(email) = input.email {
            active.email = Set(Some(email));
        }
        if let Some(phone) = input.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(industry) = input.industry {
            active.industry = Set(Some(industry));
        }
        if let Some(company_size) = input.company_size {
            active.company_size = Set(Some(company_size));
        }
        let updated = active.update(db.as_ref()).await.map_err(db_error)?;
        Ok(updated.into())
    }

    #[graphql(name = "deleteClient")]
    async fn delete_client(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<bool> {
        let db = database(ctx)?;
        let res = client::Entity::delete_by_id(id)
            .exec(db.as_ref())
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }

    #[graphql(name = "createProject")]
    async fn create_project(
        &self,
        ctx: &Context<'_>,
        input: NewProjectInput,
    ) -> async_graphql::Result<ProjectNode> {
        let db = database(ctx)?;
        let span = info_span!("records.projects.create");
        let _guard = span.enter();
        let owner = ensure_client(db.as_ref(), input.client_id, "project")
            .await
            .map_err(record_error)?;
        let amount =
            validate_amount("estimatedAmount", input.estimated_amount).map_err(record_error)?;
        let now: DateTimeWithTimeZone = Utc::now().into();
        let created = project::ActiveModel {
            id: NotSet,
            client_id: Set(owner.id),
            title: Set(input.title),
            status: Set(input
                .status
                .map(project::Status::from)
                .unwrap_or(project::Status::Inquiry)),
            consultation_content: Set(input.consultation_content),
            proposal_content: Set(input.proposal_content),
            estimated_amount: Set(amount),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db.as_ref())
        .await
        .map_err(db_error)?;
        Ok(ProjectNode::from_model(created, Some(owner.company_name)))
    }

    #[graphql(name = "updateProject")]
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        input: UpdateProjectInput,
    ) -> async_graphql::Result<ProjectNode> {
        let db = database(ctx)?;
        let model = project::Entity::find_by_id(input.id)
            .one(db.as_ref())
            .await
            .map_err(db_error)?
            .ok_or_else(|| {
                record_error(RecordError::NotFound {
                    entity: "project",
                    id: input.id,
                })
            })?;
        let mut active: project::ActiveModel = model.into();
        if let Some(client_id) = input.client_id {
            let owner = ensure_client(db.as_ref(), client_id, "project")
                .await
                .map_err(record_error)?;
            active.client_id = Set(owner.id);
        }
        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(status) = input.status {
            active.status = Set(status.into());
        }
        if let Some(consultation_content) = input.consultation_content {
            active.consultation_content = Set(Some(consultation_content));
        }
        if let Some(proposal_content) = input.proposal_content {
            active.proposal_content = Set(Some(proposal_content));
        }
        if let Some(estimated_amount) = input.estimated_amount {
            let amount =
                validate_amount("estimatedAmount", Some(estimated_amount)).map_err(record_error)?;
            active.estimated_amount = Set(amount);
        }
        if let Some(start_date) = input.start_date {
            active.start_date = Set(Some(start_date));
        }
        if let Some(end_date) = input.end_date {
            active.end_date = Set(Some(end_date));
        }
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(db.as_ref()).await.map_err(db_error)?;
        let client_name = client::Entity::find_by_id(updated.client_id)
            .one(db.as_ref())
            .await
            .map_err(db_error)?
            .map(|c| c.company_name);
        Ok(ProjectNode::from_model(updated, client_name))
    }

    #[graphql(name = "deleteProject")]
    async fn delete_project(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<bool> {
        let db = database(ctx)?;
        let res = project::Entity::delete_by_id(id)
            .exec(db.as_ref())
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }

    #[graphql(name = "createHandover")]
    async fn create_handover(
        &self,
        ctx: &Context<'_>,
        input: NewHandoverInput,
    ) -> async_graphql::Result<HandoverNode> {
        let db = database(ctx)?;
        let owner = ensure_project(db.as_ref(), input.project_id, "handover")
            .await
            .map_err(record_error)?;
        let handover_date: DateTimeWithTimeZone =
            input.handover_date.unwrap_or_else(Utc::now).into();
        let created = handover::ActiveModel {
            id: NotSet,
            project_id: Set(owner.id),
            handover_type: Set(input.handover_type.into()),
            handover_to: Set(input.handover_to),
            handover_date: Set(handover_date),
            handover_content: Set(input.handover_content),
            technical_requirements: Set(input.technical_requirements),
            notes: Set(input.notes),
            is_completed: Set(input.is_completed.unwrap_or(false)),
        }
        .insert(db.as_ref())
        .await
        .map_err(db_error)?;
        Ok(HandoverNode::from_model(created, Some(owner.title)))
    }

    #[graphql(name = "updateHandover")]
    async fn update_handover(
        &self,
        ctx: &Context<'_>,
        input: UpdateHandoverInput,
    ) -> async_graphql::Result<HandoverNode> {
        let db = database(ctx)?;
        let model = handover::Entity::find_by_id(input.id)
            .one(db.as_ref())
            .await
            .map_err(db_error)?
            .ok_or_else(|| {
                record_error(RecordError::NotFound {
                    entity: "handover",
                    id: input.id,
                })
            })?;
        let mut active: handover::ActiveModel = model.into();
        if let Some(handover_type) = input.handover_type {
            active.handover_type = Set(handover_type.into());
        }
        if let Some(handover_to) = input.handover_to {
            active.handover_to = Set(handover_to);
        }
        if let Some(handover_date) = input.handover_date {
            active.handover_date = Set(handover_date.into());
        }
        if let Some(handover_content) = input.handover_content {
            active.handover_content = Set(handover_content);
        }
        if let Some(technical_requirements) = input.technical_requirements {
            active.technical_requirements = Set(Some(technical_requirements));
        }
        if let Some(notes) = input.notes {
            active.notes = Set(Some(notes));
        }
        if let Some(is_completed) = input.is_completed {
            active.is_completed = Set(is_completed);
        }
        let updated = active.update(db.as_ref()).await.map_err(db_error)?;
        let project_title = project_title(db.as_ref(), updated.project_id).await?;
        Ok(HandoverNode::from_model(updated, project_title))
    }

    #[graphql(name = "deleteHandover")]
    async fn delete_handover(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<bool> {
        let db = database(ctx)?;
        let res = handover::Entity::delete_by_id(id)
            .exec(db.as_ref())
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }

    #[graphql(name = "createProgressLog")]
    async fn create_progress_log(
        &self,
        ctx: &Context<'_>,
        input: NewProgressLogInput,
    ) -> async_graphql::Result<ProgressLogNode> {
        let db = database(ctx)?;
        let owner = ensure_project(db.as_ref(), input.project_id, "progress_log")
            .await
            .map_err(record_error)?;
        let log_date: DateTimeWithTimeZone = input.log_date.unwrap_or_else(Utc::now).into();
        let created = progress_log::ActiveModel {
            id: NotSet,
            project_id: Set(owner.id),
            log_date: Set(log_date),
            activity_type: Set(input.activity_type.into()),
            content: Set(input.content),
            next_action: Set(input.next_action),
            created_by: Set(input
                .created_by
                .unwrap_or_else(|| progress_log::DEFAULT_CREATED_BY.to_string())),
        }
        .insert(db.as_ref())
        .await
        .map_err(db_error)?;
        Ok(ProgressLogNode::from_model(created, Some(owner.title)))
    }

    #[graphql(name = "updateProgressLog")]
    async fn update_progress_log(
        &self,
        ctx: &Context<'_>,
        input: UpdateProgressLogInput,
    ) -> async_graphql::Result<ProgressLogNode> {
        let db = database(ctx)?;
        let model = progress_log::Entity::find_by_id(input.id)
            .one(db.as_ref())
            .await
            .map_err(db_error)?
            .ok_or_else(|| {
                record_error(RecordError::NotFound {
                    entity: "progress_log",
                    id: input.id,
                })
            })?;
        let mut active: progress_log::ActiveModel = model.into();
        if let Some(log_date) = input.log_date {
            active.log_date = Set(log_date.into());
        }
        if let Some(activity_type) = input.activity_type {
            active.activity_type = Set(activity_type.into());
        }
        if let Some(content) = input.content {
            active.content = Set(content);
        }
        if let Some(next_action) = input.next_action {
            active.next_action = Set(Some(next_action));
        }
        if let Some(created_by) = input.created_by {
            active.created_by = Set(created_by);
        }
        let updated = active.update(db.as_ref()).await.map_err(db_error)?;
        let project_title = project_title(db.as_ref(), updated.project_id).await?;
        Ok(ProgressLogNode::from_model(updated, project_title))
    }

    #[graphql(name = "deleteProgressLog")]
    async fn delete_progress_log(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<bool> {
        let db = database(ctx)?;
        let res = progress_log::Entity::delete_by_id(id)
            .exec(db.as_ref())
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }

    #[graphql(name = "createEngineerHandoff")]
    async fn create_engineer_handoff(
        &self,
        ctx: &Context<'_>,
        input: NewEngineerHandoffInput,
    ) -> async_graphql::Result<EngineerHandoffNode> {
        let db = database(ctx)?;
        let owner = ensure_project(db.as_ref(), input.project_id, "engineer_handoff")
            .await
            .map_err(record_error)?;
        let budget = validate_amount("budget", input.budget).map_err(record_error)?;
        let handoff_date: DateTimeWithTimeZone = input.handoff_date.unwrap_or_else(Utc::now).into();
        let created = engineer_handoff::ActiveModel {
            id: NotSet,
            project_id: Set(owner.id),
            engineer_name: Set(input.engineer_name),
            handoff_date: Set(handoff_date),
            technical_scope: Set(input.technical_scope),
            current_status: Set(input.current_status),
            client_requirements: Set(input.client_requirements),
            timeline: Set(input.timeline),
            budget: Set(budget),
            special_notes: Set(input.special_notes),
            is_accepted: Set(input.is_accepted.unwrap_or(false)),
        }
        .insert(db.as_ref())
        .await
        .map_err(db_error)?;
        Ok(EngineerHandoffNode::from_model(created, Some(owner.title)))
    }

    #[graphql(name = "updateEngineerHandoff")]
    async fn update_engineer_handoff(
        &self,
        ctx: &Context<'_>,
        input: UpdateEngineerHandoffInput,
    ) -> async_graphql::Result<EngineerHandoffNode> {
        let db = database(ctx)?;
        let model = engineer_handoff::Entity::find_by_id(input.id)
            .one(db.as_ref())
            .await
            .map_err(db_error)?
            .ok_or_else(|| {
                record_error(RecordError::NotFound {
                    entity: "engineer_handoff",
                    id: input.id,
                })
            })?;
        let mut active: engineer_handoff::ActiveModel = model.into();
        if let Some(engineer_name) = input.engineer_name {
            active.engineer_name = Set(engineer_name);
        }
        if let Some(handoff_date) = input.handoff_date {
            active.handoff_date = Set(handoff_date.into());
        }
        if let Some(technical_scope) = input.technical_scope {
            active.technical_scope = Set(technical_scope);
        }
        if let Some(current_status) = input.current_status {
            active.current_status = Set(current_status);
        }
        if let Some(client_requirements) = input.client_requirements {
            active.client_requirements = Set(client_requirements);
        }
        if let Some(timeline) = input.timeline {
            active.timeline = Set(Some(timeline));
        }
        if let Some(budget) = input.budget {
            let budget = validate_amount("budget", Some(budget)).map_err(record_error)?;
            active.budget = Set(budget);
        }
        if let Some(special_notes) = input.special_notes {
            active.special_notes = Set(Some(special_notes));
        }
        if let Some(is_accepted) = input.is_accepted {
            active.is_accepted = Set(is_accepted);
        }
        let updated = active.update(db.as_ref()).await.map_err(db_error)?;
        let project_title = project_title(db.as_ref(), updated.project_id).await?;
        Ok(EngineerHandoffNode::from_model(updated, project_title))
    }

    #[graphql(name = "deleteEngineerHandoff")]
    async fn delete_engineer_handoff(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> async_graphql::Result<bool> {
        let db = database(ctx)?;
        let res = engineer_handoff::Entity::delete_by_id(id)
            .exec(db.as_ref())
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected > 0)
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ProjectStatus {
    Inquiry,
    Hearing,
    Proposal,
    Quotation,
    Negotiation,
    Handover,
    InProgress,
    Completed,
    OnHold,
    Lost,
}

impl From<project::Status> for ProjectStatus {
    fn from(value: project::Status) -> Self {
        match value {
            project::Status::Inquiry => ProjectStatus::Inquiry,
            project::Status::Hearing => ProjectStatus::Hearing,
            project::Status::Proposal => ProjectStatus::Proposal,
            project::Status::Quotation => ProjectStatus::Quotation,
            project::Status::Negotiation => ProjectStatus::Negotiation,
            project::Status::Handover => ProjectStatus::Handover,
            project::Status::InProgress => ProjectStatus::InProgress,
            project::Status::Completed => ProjectStatus::Completed,
            project::Status::OnHold => ProjectStatus::OnHold,
            project::Status::Lost => ProjectStatus::Lost,
        }
    }
}

impl From<ProjectStatus> for project::Status {
    fn from(value: ProjectStatus) -> Self {
        match value {
            ProjectStatus::Inquiry => project::Status::Inquiry,
            ProjectStatus::Hearing => project::Status::Hearing,
            ProjectStatus::Proposal => project::Status::Proposal,
            ProjectStatus::Quotation => project::Status::Quotation,
            ProjectStatus::Negotiation => project::Status::Negotiation,
            ProjectStatus::Handover => project::Status::Handover,
            ProjectStatus::InProgress => project::Status::InProgress,
            ProjectStatus::Completed => project::Status::Completed,
            ProjectStatus::OnHold => project::Status::OnHold,
            ProjectStatus::Lost => project::Status::Lost,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum HandoverKind {
    StaffA,
    StaffB,
    OtherEngineer,
}

impl From<handover::Kind> for HandoverKind {
    fn from(value: handover::Kind) -> Self {
        match value {
            handover::Kind::StaffA => HandoverKind::StaffA,
            handover::Kind::StaffB => HandoverKind::StaffB,
            handover::Kind::OtherEngineer => HandoverKind::OtherEngineer,
        }
    }
}

impl From<HandoverKind> for handover::Kind {
    fn from(value: HandoverKind) -> Self {
        match value {
            HandoverKind::StaffA => handover::Kind::StaffA,
            HandoverKind::StaffB => handover::Kind::StaffB,
            HandoverKind::OtherEngineer => handover::Kind::OtherEngineer,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ActivityKind {
    Meeting,
    Phone,
    Email,
    Proposal,
    Quotation,
    Presentation,
    Other,
}

impl From<progress_log::ActivityType> for ActivityKind {
    fn from(value: progress_log::ActivityType) -> Self {
        match value {
            progress_log::ActivityType::Meeting => ActivityKind::Meeting,
            progress_log::ActivityType::Phone => ActivityKind::Phone,
            progress_log::ActivityType::Email => ActivityKind::Email,
            progress_log::ActivityType::Proposal => ActivityKind::Proposal,
            progress_log::ActivityType::Quotation => ActivityKind::Quotation,
            progress_log::ActivityType::Presentation => ActivityKind::Presentation,
            progress_log::ActivityType::Other => ActivityKind::Other,
        }
    }
}

impl From<ActivityKind> for progress_log::ActivityType {
    fn from(value: ActivityKind) -> Self {
        match value {
            ActivityKind::Meeting => progress_log::ActivityType::Meeting,
            ActivityKind::Phone => progress_log::ActivityType::Phone,
            ActivityKind::Email => progress_log::ActivityType::Email,
            ActivityKind::Proposal => progress_log::ActivityType::Proposal,
            ActivityKind::Quotation => progress_log::ActivityType::Quotation,
            ActivityKind::Presentation => progress_log::ActivityType::Presentation,
            ActivityKind::Other => progress_log::ActivityType::Other,
        }
    }
}

#[derive(InputObject, Clone)]
pub struct NewClientInput {
    #[graphql(name = "companyName")]
    pub company_name: String,
    #[graphql(name = "contactPerson")]
    pub contact_person: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
    #[graphql(name = "companySize")]
    pub company_size: Option<String>,
}

#[derive(InputObject, Clone)]
pub struct UpdateClientInput {
    pub id: i32,
    #[graphql(name = "companyName")]
    pub company_name: Option<String>,
    #[graphql(name = "contactPerson")]
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
    #[graphql(name = "companySize")]
    pub company_size: Option<String>,
}

#[derive(InputObject, Clone)]
pub struct NewProjectInput {
    #[graphql(name = "clientId")]
    pub client_id: i32,
    pub title: String,
    pub status: Option<ProjectStatus>,
    #[graphql(name = "consultationContent")]
    pub consultation_content: Option<String>,
    #[graphql(name = "proposalContent")]
    pub proposal_content: Option<String>,
    #[graphql(name = "estimatedAmount")]
    pub estimated_amount: Option<i64>,
    #[graphql(name = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[graphql(name = "endDate")]
    pub end_date: Option<NaiveDate>,
}

#[derive(InputObject, Clone)]
pub struct UpdateProjectInput {
    pub id: i32,
    #[graphql(name = "clientId")]
    pub client_id: Option<i32>,
    pub title: Option<String>,
    pub status: Option<ProjectStatus>,
    #[graphql(name = "consultationContent")]
    pub consultation_content: Option<String>,
    #[graphql(name = "proposalContent")]
    pub proposal_content: Option<String>,
    #[graphql(name = "estimatedAmount")]
    pub estimated_amount: Option<i64>,
    #[graphql(name = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[graphql(name = "endDate")]
    pub end_date: Option<NaiveDate>,
}

#[derive(InputObject, Clone)]
pub struct NewHandoverInput {
    #[graphql(name = "projectId")]
    pub project_id: i32,
    #[graphql(name = "type")]
    pub handover_type: HandoverKind,
    #[graphql(name = "handoverTo")]
    pub handover_to: String,
    #[graphql(name = "handoverDate")]
    pub handover_date: Option<DateTime<Utc>>,
    #[graphql(name = "handoverContent")]
    pub handover_content: String,
    #[graphql(name = "technicalRequirements")]
    pub technical_requirements: Option<String>,
    pub notes: Option<String>,
    #[graphql(name = "isCompleted")]
    pub is_completed: Option<bool>,
}

#[derive(InputObject, Clone)]
pub struct UpdateHandoverInput {
    pub id: i32,
    #[graphql(name = "type")]
    pub handover_type: Option<HandoverKind>,
    #[graphql(name = "handoverTo")]
    pub handover_to: Option<String>,
    #[graphql(name = "handoverDate")]
    pub handover_date: Option<DateTime<Utc>>,
    #[graphql(name = "handoverContent")]
    pub handover_content: Option<String>,
    #[graphql(name = "technicalRequirements")]
    pub technical_requirements: Option<String>,
    pub notes: Option<String>,
    #[graphql(name = "isCompleted")]
    pub is_completed: Option<bool>,
}

#[derive(InputObject, Clone)]
pub struct NewProgressLogInput {
    #[graphql(name = "projectId")]
    pub project_id: i32,
    #[graphql(name = "logDate")]
    pub log_date: Option<DateTime<Utc>>,
    #[graphql(name = "activityType")]
    pub activity_type: ActivityKind,
    pub content: String,
    #[graphql(name = "nextAction")]
    pub next_action: Option<String>,
    #[graphql(name = "createdBy")]
    pub created_by: Option<String>,
}

#[derive(InputObject, Clone)]
pub struct UpdateProgressLogInput {
    pub id: i32,
    #[graphql(name = "logDate")]
    pub log_date: Option<DateTime<Utc>>,
    #[graphql(name = "activityType")]
    pub activity_type: Option<ActivityKind>,
    pub content: Option<String>,
    #[graphql(name = "nextAction")]
    pub next_action: Option<String>,
    #[graphql(name = "createdBy")]
    pub created_by: Option<String>,
}

#[derive(InputObject, Clone)]
pub struct NewEngineerHandoffInput {
    #[graphql(name = "projectId")]
    pub project_id: i32,
    #[graphql(name = "engineerName")]
    pub engineer_name: String,
    #[graphql(name = "handoffDate")]
    pub handoff_date: Option<DateTime<Utc>>,
    #[graphql(name = "technicalScope")]
    pub technical_scope: String,
    #[graphql(name = "currentStatus")]
    pub current_status: String,
    #[graphql(name = "clientRequirements")]
    pub client_requirements: String,
    pub timeline: Option<String>,
    pub budget: Option<i64>,
    #[graphql(name = "specialNotes")]
    pub special_notes: Option<String>,
    #[graphql(name = "isAccepted")]
    pub is_accepted: Option<bool>,
}

#[derive(InputObject, Clone)]
pub struct UpdateEngineerHandoffInput {
    pub id: i32,
    #[graphql(name = "engineerName")]
    pub engineer_name: Option<String>,
    #[graphql(name = "handoffDate")]
    pub handoff_date: Option<DateTime<Utc>>,
    #[graphql(name = "technicalScope")]
    pub technical_scope: Option<String>,
    #[graphql(name = "currentStatus")]
    pub current_status: Option<String>,
    #[graphql(name = "clientRequirements")]
    pub client_requirements: Option<String>,
    pub timeline: Option<String>,
    pub budget: Option<i64>,
    #[graphql(name = "specialNotes")]
    pub special_notes: Option<String>,
    #[graphql(name = "isAccepted")]
    pub is_accepted: Option<bool>,
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Client")]
pub struct ClientNode {
    pub id: i32,
    #[graphql(name = "companyName")]
    pub company_name: String,
    #[graphql(name = "contactPerson")]
    pub contact_person: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
    #[graphql(name = "companySize")]
    pub company_size: Option<String>,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<client::Model> for ClientNode {
    fn from(model: client::Model) -> Self {
        Self {
            id: model.id,
            company_name: model.company_name,
            contact_person: model.contact_person,
            email: model.email,
            phone: model.phone,
            industry: model.industry,
            company_size: model.company_size,
            created_at: model.created_at.into(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "ClientSummary")]
pub struct ClientSummaryNode {
    pub id: i32,
    #[graphql(name = "companyName")]
    pub company_name: String,
    #[graphql(name = "contactPerson")]
    pub contact_person: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
    #[graphql(name = "companySize")]
    pub company_size: Option<String>,
    #[graphql(name = "projectCount")]
    pub project_count: i64,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<ClientWithProjects> for ClientSummaryNode {
    fn from(row: ClientWithProjects) -> Self {
        Self {
            id: row.id,
            company_name: row.company_name,
            contact_person: row.contact_person,
            email: row.email,
            phone: row.phone,
            industry: row.industry,
            company_size: row.company_size,
            project_count: row.project_count,
            created_at: row.created_at.into(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Project")]
pub struct ProjectNode {
    pub id: i32,
    #[graphql(name = "clientId")]
    pub client_id: i32,
    #[graphql(name = "clientName")]
    pub client_name: Option<String>,
    pub title: String,
    pub status: ProjectStatus,
    #[graphql(name = "statusLabel")]
    pub status_label: String,
    #[graphql(name = "consultationContent")]
    pub consultation_content: Option<String>,
    #[graphql(name = "proposalContent")]
    pub proposal_content: Option<String>,
    #[graphql(name = "estimatedAmount")]
    pub estimated_amount: Option<i64>,
    #[graphql(name = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[graphql(name = "endDate")]
    pub end_date: Option<NaiveDate>,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[graphql(name = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl ProjectNode {
    fn from_model(model: project::Model, client_name: Option<String>) -> Self {
        Self {
            id: model.id,
            client_id: model.client_id,
            client_name,
            title: model.title,
            status: model.status.into(),
            status_label: model.status.label().to_string(),
            consultation_content: model.consultation_content,
            proposal_content: model.proposal_content,
            estimated_amount: model.estimated_amount,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<(project::Model, Option<client::Model>)> for ProjectNode {
    fn from((model, client): (project::Model, Option<client::Model>)) -> Self {
        let client_name = client.map(|c| c.company_name);
        Self::from_model(model, client_name)
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Handover")]
pub struct HandoverNode {
    pub id: i32,
    #[graphql(name = "projectId")]
    pub project_id: i32,
    #[graphql(name = "projectTitle")]
    pub project_title: Option<String>,
    #[graphql(name = "type")]
    pub handover_type: HandoverKind,
    #[graphql(name = "typeLabel")]
    pub type_label: String,
    #[graphql(name = "handoverTo")]
    pub handover_to: String,
    #[graphql(name = "handoverDate")]
    pub handover_date: DateTime<Utc>,
    #[graphql(name = "handoverContent")]
    pub handover_content: String,
    #[graphql(name = "technicalRequirements")]
    pub technical_requirements: Option<String>,
    pub notes: Option<String>,
    #[graphql(name = "isCompleted")]
    pub is_completed: bool,
}

impl HandoverNode {
    fn from_model(model: handover::Model, project_title: Option<String>) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            project_title,
            handover_type: model.handover_type.into(),
            type_label: model.handover_type.label().to_string(),
            handover_to: model.handover_to,
            handover_date: model.handover_date.into(),
            handover_content: model.handover_content,
            technical_requirements: model.technical_requirements,
            notes: model.notes,
            is_completed: model.is_completed,
        }
    }
}

impl From<(handover::Model, Option<project::Model>)> for HandoverNode {
    fn from((model, project): (handover::Model, Option<project::Model>)) -> Self {
        let title = project.map(|p| p.title);
        Self::from_model(model, title)
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "ProgressLog")]
pub struct ProgressLogNode {
    pub id: i32,
    #[graphql(name = "projectId")]
    pub project_id: i32,
    #[graphql(name = "projectTitle")]
    pub project_title: Option<String>,
    #[graphql(name = "logDate")]
    pub log_date: DateTime<Utc>,
    #[graphql(name = "activityType")]
    pub activity_type: ActivityKind,
    #[graphql(name = "activityTypeLabel")]
    pub activity_type_label: String,
    pub content: String,
    #[graphql(name = "nextAction")]
    pub next_action: Option<String>,
    #[graphql(name = "createdBy")]
    pub created_by: String,
}

impl ProgressLogNode {
    fn from_model(model: progress_log::Model, project_title: Option<String>) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            project_title,
            log_date: model.log_date.into(),
            activity_type: model.activity_type.into(),
            activity_type_label: model.activity_type.label().to_string(),
            content: model.content,
            next_action: model.next_action,
            created_by: model.created_by,
        }
    }
}

impl From<(progress_log::Model, Option<project::Model>)> for ProgressLogNode {
    fn from((model, project): (progress_log::Model, Option<project::Model>)) -> Self {
        let title = project.map(|p| p.title);
        Self::from_model(model, title)
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "EngineerHandoff")]
pub struct EngineerHandoffNode {
    pub id: i32,
    #[graphql(name = "projectId")]
    pub project_id: i32,
    #[graphql(name = "projectTitle")]
    pub project_title: Option<String>,
    #[graphql(name = "engineerName")]
    pub engineer_name: String,
    #[graphql(name = "handoffDate")]
    pub handoff_date: DateTime<Utc>,
    #[graphql(name = "technicalScope")]
    pub technical_scope: String,
    #[graphql(name = "currentStatus")]
    pub current_status: String,
    #[graphql(name = "clientRequirements")]
    pub client_requirements: String,
    pub timeline: Option<String>,
    pub budget: Option<i64>,
    #[graphql(name = "specialNotes")]
    pub special_notes: Option<String>,
    #[graphql(name = "isAccepted")]
    pub is_accepted: bool,
}

impl EngineerHandoffNode {
    fn from_model(model: engineer_handoff::Model, project_title: Option<String>) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            project_title,
            engineer_name: model.engineer_name,
            handoff_date: model.handoff_date.into(),
            technical_scope: model.technical_scope,
            current_status: model.current_status,
            client_requirements: model.client_requirements,
            timeline: model.timeline,
            budget: model.budget,
            special_notes: model.special_notes,
            is_accepted: model.is_accepted,
        }
    }
}

impl From<(engineer_handoff::Model, Option<project::Model>)> for EngineerHandoffNode {
    fn from((model, project): (engineer_handoff::Model, Option<project::Model>)) -> Self {
        let title = project.map(|p| p.title);
        Self::from_model(model, title)
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "StatusCount")]
pub struct StatusCountNode {
    pub status: ProjectStatus,
    pub label: String,
    pub count: i64,
}

impl From<StatusCount> for StatusCountNode {
    fn from(value: StatusCount) -> Self {
        Self {
            status: value.status.into(),
            label: value.status.label().to_string(),
            count: value.count,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Dashboard")]
pub struct DashboardNode {
    #[graphql(name = "statusCounts")]
    pub status_counts: Vec<StatusCountNode>,
    #[graphql(name = "newProjectsCount")]
    pub new_projects_count: i64,
    #[graphql(name = "activeProjectsCount")]
    pub active_projects_count: i64,
    #[graphql(name = "totalEstimated")]
    pub total_estimated: i64,
    #[graphql(name = "recentProjects")]
    pub recent_projects: Vec<ProjectNode>,
    #[graphql(name = "pendingHandoffs")]
    pub pending_handoffs: Vec<EngineerHandoffNode>,
    #[graphql(name = "recentActivities")]
    pub recent_activities: Vec<ProgressLogNode>,
}

impl From<DashboardSummary> for DashboardNode {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            status_counts: summary
                .status_counts
                .into_iter()
                .map(StatusCountNode::from)
                .collect(),
            new_projects_count: summary.new_projects_count as i64,
            active_projects_count: summary.active_projects_count as i64,
            total_estimated: summary.total_estimated,
            recent_projects: summary
                .recent_projects
                .into_iter()
                .map(ProjectNode::from)
                .collect(),
            pending_handoffs: summary
                .pending_handoffs
                .into_iter()
                .map(EngineerHandoffNode::from)
                .collect(),
            recent_activities: summary
                .recent_activities
                .into_iter()
                .map(ProgressLogNode::from)
                .collect(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "ProjectDetail")]
pub struct ProjectDetailNode {
    pub project: ProjectNode,
    pub handovers: Vec<HandoverNode>,
    #[graphql(name = "progressLogs")]
    pub progress_logs: Vec<ProgressLogNode>,
    #[graphql(name = "engineerHandoffs")]
    pub engineer_handoffs: Vec<EngineerHandoffNode>,
}

impl From<ProjectDetail> for ProjectDetailNode {
    fn from(detail: ProjectDetail) -> Self {
        let title = detail.project.title.clone();
        let client_name = detail.client.map(|c| c.company_name);
        Self {
            project: ProjectNode::from_model(detail.project, client_name),
            handovers: detail
                .handovers
                .into_iter()
                .map(|model| HandoverNode::from_model(model, Some(title.clone())))
                .collect(),
            progress_logs: detail
                .progress_logs
                .into_iter()
                .map(|model| ProgressLogNode::from_model(model, Some(title.clone())))
                .collect(),
            engineer_handoffs: detail
                .engineer_handoffs
                .into_iter()
                .map(|model| EngineerHandoffNode::from_model(model, Some(title.clone())))
                .collect(),
        }
    }
}

async fn ensure_client(
    db: &DatabaseConnection,
    id: i32,
    child: &'static str,
) -> Result<client::Model, RecordError> {
    client::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(RecordError::ReferentialIntegrity {
            child,
            parent: "client",
            parent_id: id,
        })
}

async fn ensure_project(
    db: &DatabaseConnection,
    id: i32,
    child: &'static str,
) -> Result<project::Model, RecordError> {
    project::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(RecordError::ReferentialIntegrity {
            child,
            parent: "project",
            parent_id: id,
        })
}

async fn project_title(
    db: &DatabaseConnection,
    id: i32,
) -> async_graphql::Result<Option<String>> {
    let title = project::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_error)?
        .map(|p| p.title);
    Ok(title)
}

fn validate_amount(field: &'static str, value: Option<i64>) -> Result<Option<i64>, RecordError> {
    match value {
        Some(amount) if amount < 0 => Err(RecordError::InvalidValue(format!(
            "{} must be non-negative, got {}",
            field, amount
        ))),
        other => Ok(other),
    }
}

fn database(ctx: &Context<'_>) -> async_graphql::Result<Arc<DatabaseConnection>> {
    ctx.data::<Arc<DatabaseConnection>>()
        .cloned()
        .map_err(|_| error_with_code("INTERNAL", "Missing database connection"))
}

fn db_error(err: DbErr) -> Error {
    error_with_code("INTERNAL", format!("Database error: {}", err))
}

fn record_error(err: RecordError) -> Error {
    let code = match &err {
        RecordError::NotFound { .. } => "NOT_FOUND",
        RecordError::ReferentialIntegrity { .. } => "REFERENTIAL_INTEGRITY",
        RecordError::InvalidEnumValue { .. } => "INVALID_ENUM",
        RecordError::InvalidValue(_) => "VALIDATION",
        RecordError::Db(_) => "INTERNAL",
    };
    error_with_code(code, err.to_string())
}

fn error_with_code(code: &'static str, message: impl Into<String>) -> Error {
    Error::new(message).extend_with(|_, e| e.set("code", code))
}
