//! Demo fixture loader. Clears existing rows child-first, then inserts a small
//! but representative data set: three clients, four projects across the
//! pipeline, two handovers, two engineer handoffs and five progress logs.

use chrono::{Duration, Utc};
use entity::{client, engineer_handoff, handover, progress_log, project};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    DatabaseConnection, DbErr, EntityTrait,
};

#[derive(Debug, Clone)]
pub struct SeededRecords {
    pub clients: Vec<client::Model>,
    pub projects: Vec<project::Model>,
    pub handovers: Vec<handover::Model>,
    pub engineer_handoffs: Vec<engineer_handoff::Model>,
    pub progress_logs: Vec<progress_log::Model>,
}

impl SeededRecords {
    pub fn client_named(&self, company_name: &str) -> Option<&client::Model> {
        self.clients.iter().find(|c| c.company_name == company_name)
    }

    pub fn project_titled(&self, title: &str) -> Option<&project::Model> {
        self.projects.iter().find(|p| p.title == title)
    }
}

pub async fn seed_demo(db: &DatabaseConnection) -> Result<SeededRecords, DbErr> {
    // Reseeding must be idempotent: wipe children before parents.
    engineer_handoff::Entity::delete_many().exec(db).await?;
    progress_log::Entity::delete_many().exec(db).await?;
    handover::Entity::delete_many().exec(db).await?;
    project::Entity::delete_many().exec(db).await?;
    client::Entity::delete_many().exec(db).await?;

    let now = Utc::now();
    let today = now.date_naive();
    let days_ago = |days: i64| -> DateTimeWithTimeZone { (now - Duration::days(days)).into() };

    let tech_solutions = client::ActiveModel {
        id: NotSet,
        company_name: Set("株式会社テックソリューションズ".into()),
        contact_person: Set("山田太郎".into()),
        email: Set(Some("yamada@tech-solutions.jp".into())),
        phone: Set(Some("03-1234-5678".into())),
        industry: Set(Some("IT・情報サービス".into())),
        company_size: Set(Some("中堅企業（100-500名）".into())),
        created_at: Set(days_ago(40)),
    }
    .insert(db)
    .await?;

    let global_mfg = client::ActiveModel {
        id: NotSet,
        company_name: Set("グローバル製造株式会社".into()),
        contact_person: Set("佐藤花子".into()),
        email: Set(Some("sato@global-mfg.co.jp".into())),
        phone: Set(Some("06-9876-5432".into())),
        industry: Set(Some("製造業".into())),
        company_size: Set(Some("大企業（1000名以上）".into())),
        created_at: Set(days_ago(32)),
    }
    .insert(db)
    .await?;

    let startup = client::ActiveModel {
        id: NotSet,
        company_name: Set("スタートアップ株式会社".into()),
        contact_person: Set("鈴木一郎".into()),
        email: Set(Some("suzuki@startup.jp".into())),
        phone: Set(Some("03-5555-6666".into())),
        industry: Set(Some("スタートアップ".into())),
        company_size: Set(Some("小規模企業（～50名）".into())),
        created_at: Set(days_ago(25)),
    }
    .insert(db)
    .await?;

    let cloud_migration = project::ActiveModel {
        id: NotSet,
        client_id: Set(tech_solutions.id),
        title: Set("業務システムのクラウド移行支援".into()),
        status: Set(project::Status::Proposal),
        consultation_content: Set(Some(
            "現在オンプレミスで運用している基幹システムをクラウドに移行したいとのご相談。\n\
             コスト削減とスケーラビリティの向上が主な目的。\n\
             現行システムの分析から移行計画の策定、実装支援までを希望されています。"
                .into(),
        )),
        proposal_content: Set(Some(
            "3フェーズでの移行を提案：\n\
             1. 現状分析・移行計画策定（2ヶ月）\n\
             2. パイロット移行・検証（3ヶ月）\n\
             3. 本番移行・運用移管（4ヶ月）\n\n\
             総予算: 3,500万円"
                .into(),
        )),
        estimated_amount: Set(Some(35_000_000)),
        start_date: Set(Some(today + Duration::days(30))),
        end_date: Set(Some(today + Duration::days(300))),
        created_at: Set(days_ago(12)),
        updated_at: Set(days_ago(2)),
    }
    .insert(db)
    .await?;

    let data_platform = project::ActiveModel {
        id: NotSet,
        client_id: Set(global_mfg.id),
        title: Set("データ活用基盤の構築".into()),
        status: Set(project::Status::Negotiation),
        consultation_content: Set(Some(
            "製造現場のデータを活用した品質改善と予知保全の実現を目指している。\n\
             IoTセンサーからのデータ収集基盤とBIツールの導入を検討中。"
                .into(),
        )),
        proposal_content: Set(Some(
            "データ基盤構築の提案：\n\
             - データレイク構築（AWS）\n\
             - ETL処理基盤の実装\n\
             - BI ダッシュボード開発\n\
             - 現場担当者向け研修プログラム"
                .into(),
        )),
        estimated_amount: Set(Some(28_000_000)),
        start_date: Set(Some(today + Duration::days(45))),
        end_date: Set(None),
        created_at: Set(days_ago(9)),
        updated_at: Set(days_ago(1)),
    }
    .insert(db)
    .await?;

    let dx_strategy = project::ActiveModel {
        id: NotSet,
        client_id: Set(startup.id),
        title: Set("DX戦略策定支援".into()),
        status: Set(project::Status::Hearing),
        consultation_content: Set(Some(
            "スタートアップとして急成長中だが、業務プロセスが属人化している。\n\
             デジタル化による業務効率化とスケーラビリティの確保が課題。"
                .into(),
        )),
        proposal_content: Set(None),
        estimated_amount: Set(None),
        start_date: Set(None),
        end_date: Set(None),
        created_at: Set(days_ago(6)),
        updated_at: Set(days_ago(6)),
    }
    .insert(db)
    .await?;

    let security = project::ActiveModel {
        id: NotSet,
        client_id: Set(tech_solutions.id),
        title: Set("セキュリティ強化プロジェクト".into()),
        status: Set(project::Status::InProgress),
        consultation_content: Set(Some(
            "セキュリティ監査で指摘された課題への対応。\n\
             ゼロトラストアーキテクチャの導入を検討。"
                .into(),
        )),
        proposal_content: Set(Some(
            "セキュリティ強化施策：\n\
             1. 多要素認証の導入\n\
             2. アクセス権限の見直し\n\
             3. セキュリティ監視体制の構築\n\
             4. 従業員向けセキュリティ研修"
                .into(),
        )),
        estimated_amount: Set(Some(15_000_000)),
        start_date: Set(Some(today - Duration::days(30))),
        end_date: Set(Some(today + Duration::days(150))),
        created_at: Set(days_ago(3)),
        updated_at: Set(days_ago(1)),
    }
    .insert(db)
    .await?;

    let cloud_handover = handover::ActiveModel {
        id: NotSet,
        project_id: Set(cloud_migration.id),
        handover_type: Set(handover::Kind::StaffA),
        handover_to: Set("スタッフA".into()),
        handover_date: Set(days_ago(5)),
        handover_content: Set(
            "クラウド移行の技術的な実装部分について相談。\n\
             特にデータベースマイグレーションとネットワーク設計について助言をお願いします。"
                .into(),
        ),
        technical_requirements: Set(Some(
            "- AWS環境の構築経験\n\
             - PostgreSQLのマイグレーション経験\n\
             - VPNとセキュリティグループの設計"
                .into(),
        )),
        notes: Set(None),
        is_completed: Set(true),
    }
    .insert(db)
    .await?;

    let data_handover = handover::ActiveModel {
        id: NotSet,
        project_id: Set(data_platform.id),
        handover_type: Set(handover::Kind::StaffB),
        handover_to: Set("スタッフB".into()),
        handover_date: Set(days_ago(2)),
        handover_content: Set(
            "データ基盤のアーキテクチャ設計について相談。\n\
             特にリアルタイム処理基盤の構築方法についてアドバイスが必要です。"
                .into(),
        ),
        technical_requirements: Set(Some(
            "- ストリーミング処理の経験\n\
             - Kafka or Kinesis の知識\n\
             - データパイプライン設計経験"
                .into(),
        )),
        notes: Set(None),
        is_completed: Set(false),
    }
    .insert(db)
    .await?;

    let security_handoff = engineer_handoff::ActiveModel {
        id: NotSet,
        project_id: Set(security.id),
        engineer_name: Set("田中エンジニア".into()),
        handoff_date: Set(days_ago(4)),
        technical_scope: Set(
            "セキュリティ監視システムの実装\n\
             - SIEM導入と設定\n\
             - ログ収集基盤の構築\n\
             - アラート設定"
                .into(),
        ),
        current_status: Set("要件定義完了。実装フェーズに移行予定。".into()),
        client_requirements: Set(
            "24時間365日の監視体制\n\
             リアルタイムアラート\n\
             月次レポート作成"
                .into(),
        ),
        timeline: Set(Some(
            "3ヶ月（設計1ヶ月、実装1.5ヶ月、テスト0.5ヶ月）".into(),
        )),
        budget: Set(Some(8_000_000)),
        special_notes: Set(Some("顧客側のセキュリティ部門との密な連携が必要".into())),
        is_accepted: Set(true),
    }
    .insert(db)
    .await?;

    let cloud_handoff = engineer_handoff::ActiveModel {
        id: NotSet,
        project_id: Set(cloud_migration.id),
        engineer_name: Set("佐々木エンジニア".into()),
        handoff_date: Set(days_ago(1)),
        technical_scope: Set(
            "基幹システムのクラウド移行実装\n\
             - インフラ構築（AWS）\n\
             - アプリケーション移行\n\
             - データマイグレーション"
                .into(),
        ),
        current_status: Set("提案が承認され、キックオフ準備中".into()),
        client_requirements: Set(
            "ダウンタイム最小化（深夜・休日の作業）\n\
             段階的な移行\n\
             ロールバック計画の策定"
                .into(),
        ),
        timeline: Set(Some("9ヶ月".into())),
        budget: Set(Some(25_000_000)),
        special_notes: Set(None),
        is_accepted: Set(false),
    }
    .insert(db)
    .await?;

    let log_entries = [
        (
            cloud_migration.id,
            progress_log::ActivityType::Meeting,
            "初回キックオフミーティング実施。プロジェクトのスコープと期待値について合意。",
            Some("現行システムの詳細ヒアリング（来週予定）"),
            10i64,
        ),
        (
            cloud_migration.id,
            progress_log::ActivityType::Proposal,
            "クラウド移行提案書を作成。3フェーズでの段階的移行を提案。",
            Some("提案書のプレゼンテーション（明日 14:00）"),
            7,
        ),
        (
            data_platform.id,
            progress_log::ActivityType::Phone,
            "データ活用の目的と現状の課題についてヒアリング。製造現場の見学も希望されている。",
            Some("工場見学の日程調整"),
            5,
        ),
        (
            dx_strategy.id,
            progress_log::ActivityType::Meeting,
            "経営陣とのミーティング。3年後のビジョンと現状のギャップを整理。",
            Some("DX戦略書のドラフト作成"),
            3,
        ),
        (
            security.id,
            progress_log::ActivityType::Email,
            "セキュリティ監視システムの進捗確認。田中エンジニアから実装が順調との報告あり。",
            Some("中間報告会の開催（来月）"),
            1,
        ),
    ];
    let mut progress_logs = Vec::with_capacity(log_entries.len());
    for (project_id, activity_type, content, next_action, age_days) in log_entries {
        let log = progress_log::ActiveModel {
            id: NotSet,
            project_id: Set(project_id),
            log_date: Set(days_ago(age_days)),
            activity_type: Set(activity_type),
            content: Set(content.into()),
            next_action: Set(next_action.map(Into::into)),
            created_by: Set("営業担当".into()),
        }
        .insert(db)
        .await?;
        progress_logs.push(log);
    }

    Ok(SeededRecords {
        clients: vec![tech_solutions, global_mfg, startup],
        projects: vec![cloud_migration, data_platform, dx_strategy, security],
        handovers: vec![cloud_handover, data_handover],
        engineer_handoffs: vec![security_handoff, cloud_handoff],
        progress_logs,
    })
}
