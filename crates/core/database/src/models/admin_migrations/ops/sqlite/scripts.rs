use rusqlite::Connection;

pub const LATEST_REVISION: i32 = 1; // MUST BE +1 to last migration

/// Bring the schema up to date, returning the resulting revision
///
/// The revision is tracked in `PRAGMA user_version`.
pub fn migrate_database(conn: &Connection) -> rusqlite::Result<i32> {
    let revision: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let tx = conn.unchecked_transaction()?;

    if revision <= 0 {
        info!("Running migration [revision 0]: Create events and responses tables.");

        // No foreign key on event_id, responses may reference unknown events.
        tx.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS events (
                id          TEXT PRIMARY KEY,
                title       TEXT NOT NULL,
                start_date  TEXT NOT NULL,
                end_date    TEXT NOT NULL,
                created_at  TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS responses (
                event_id          TEXT NOT NULL,
                name              TEXT NOT NULL,
                unavailable_json  TEXT NOT NULL DEFAULT '[]',
                updated_at        TEXT NOT NULL,
                PRIMARY KEY (event_id, name)
            );
            ",
        )?;
    }

    // Reminder to update LATEST_REVISION when adding new migrations.
    let revision = LATEST_REVISION.max(revision);
    tx.pragma_update(None, "user_version", revision)?;
    tx.commit()?;

    Ok(revision)
}
