//! Machine detail log service

use watermon_persistence::entity::machine_log;
use watermon_persistence::sea_orm::*;

/// Append one detail snapshot. Insert-only: existing rows are never
/// touched by this path.
pub async fn append_detail(
    db: &DatabaseConnection,
    date: &str,
    water_filled: f64,
    status: &str,
    user_id: u64,
) -> anyhow::Result<()> {
    let snapshot = machine_log::ActiveModel {
        date: Set(date.to_string()),
        water_filled: Set(water_filled),
        machine_status: Set(status.to_string()),
        user_id: Set(user_id),
        gmt_create: Set(chrono::Local::now().naive_local()),
        ..Default::default()
    };
    machine_log::Entity::insert(snapshot).exec(db).await?;

    Ok(())
}

/// Most recently appended snapshot, by store-assigned id.
pub async fn find_latest_detail(
    db: &DatabaseConnection,
) -> anyhow::Result<Option<machine_log::Model>> {
    let snapshot = machine_log::Entity::find()
        .order_by_desc(machine_log::Column::Id)
        .one(db)
        .await?;

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use watermon_persistence::sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;

    fn snapshot(id: u64) -> machine_log::Model {
        machine_log::Model {
            id,
            date: "2024-01-01".to_string(),
            water_filled: 12.5,
            machine_status: "full".to_string(),
            user_id: 7,
            gmt_create: chrono::DateTime::from_timestamp(1_700_000_000, 0)
                .unwrap()
                .naive_utc(),
        }
    }

    #[tokio::test]
    async fn append_detail_inserts_one_row() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        append_detail(&db, "2024-01-01", 12.5, "full", 7)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn find_latest_detail_returns_newest_snapshot() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![snapshot(9)]])
            .into_connection();

        let latest = find_latest_detail(&db).await.unwrap().unwrap();

        assert_eq!(latest.id, 9);
        assert_eq!(latest.water_filled, 12.5);
    }

    #[tokio::test]
    async fn find_latest_detail_on_empty_log() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<machine_log::Model>::new()])
            .into_connection();

        assert!(find_latest_detail(&db).await.unwrap().is_none());
    }
}
