//! History log service

use watermon_persistence::entity::{history, machine_status};
use watermon_persistence::sea_orm::prelude::Expr;
use watermon_persistence::sea_orm::*;

/// Insert a history entry and stamp the submitted status onto every
/// machine row on that floor. Both writes commit or roll back together.
pub async fn record(
    db: &DatabaseConnection,
    date_time: &str,
    status: &str,
    floor: &str,
    user_id: u64,
) -> anyhow::Result<()> {
    let now = chrono::Local::now().naive_local();
    let tx = db.begin().await?;

    let entry = history::ActiveModel {
        date_time: Set(date_time.to_string()),
        machine_status: Set(status.to_string()),
        floor: Set(floor.to_string()),
        user_id: Set(user_id),
        gmt_create: Set(now),
        ..Default::default()
    };
    history::Entity::insert(entry).exec(&tx).await?;

    machine_status::Entity::update_many()
        .col_expr(machine_status::Column::MachineStatus, Expr::value(status))
        .col_expr(machine_status::Column::GmtModified, Expr::value(now))
        .filter(machine_status::Column::Floor.eq(floor))
        .exec(&tx)
        .await?;

    tx.commit().await?;

    Ok(())
}

/// Most recently inserted entry, by store-assigned id.
pub async fn find_latest(db: &DatabaseConnection) -> anyhow::Result<Option<history::Model>> {
    let entry = history::Entity::find()
        .order_by_desc(history::Column::Id)
        .one(db)
        .await?;

    Ok(entry)
}

/// Every entry in the log, oldest first.
pub async fn find_all(db: &DatabaseConnection) -> anyhow::Result<Vec<history::Model>> {
    let entries = history::Entity::find()
        .order_by_asc(history::Column::Id)
        .all(db)
        .await?;

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use watermon_persistence::sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;

    fn entry(id: u64) -> history::Model {
        history::Model {
            id,
            date_time: "2024-01-01T00:00".to_string(),
            machine_status: "full".to_string(),
            floor: "3".to_string(),
            user_id: 7,
            gmt_create: chrono::DateTime::from_timestamp(1_700_000_000, 0)
                .unwrap()
                .naive_utc(),
        }
    }

    #[tokio::test]
    async fn record_commits_insert_and_update() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 1,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
            ])
            .into_connection();

        record(&db, "2024-01-01T00:00", "full", "3", 7)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn find_latest_returns_newest_entry() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![entry(42)]])
            .into_connection();

        let latest = find_latest(&db).await.unwrap().unwrap();

        assert_eq!(latest.id, 42);
    }

    #[tokio::test]
    async fn find_latest_on_empty_log() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<history::Model>::new()])
            .into_connection();

        assert!(find_latest(&db).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_preserves_order() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![entry(1), entry(2), entry(3)]])
            .into_connection();

        let entries = find_all(&db).await.unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[2].id, 3);
    }
}
