use sqlite_adapter::build_result_set;
use sqlite_adapter::prelude::*;

fn unique_db_path(prefix: &str) -> String {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(format!("{prefix}.db"));
    // Leak the tempdir so the file persists for the duration of the test binary.
    std::mem::forget(dir);
    path.to_string_lossy().into_owned()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn with_connection_runs_on_the_live_session() -> Result<(), Box<dyn std::error::Error>> {
    let conn = SqliteConnection::open(":memory:").await?;

    conn.with_connection(|c| {
        c.execute_batch(
            "CREATE TABLE t (id INTEGER PRIMARY KEY);
             INSERT INTO t (id) VALUES (11), (22);",
        )?;
        Ok(())
    })
    .await?;

    // The adapter sees what the raw callback wrote, and the materialization
    // helper is usable from inside the escape hatch too.
    let rs = conn
        .with_connection(|c| {
            let mut stmt = c.prepare("SELECT id FROM t ORDER BY id")?;
            build_result_set(&mut stmt, &[])
        })
        .await?;
    assert_eq!(rs.len(), 2);
    assert_eq!(*rs.rows[1].get("id").unwrap().as_int().unwrap(), 22);

    let row = conn
        .fetch_one("SELECT MAX(id) AS top FROM t", &[])
        .await?
        .expect("row present");
    assert_eq!(*row.get("top").unwrap().as_int().unwrap(), 22);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn cloned_handles_share_one_serialized_session() -> Result<(), Box<dyn std::error::Error>> {
    let conn = SqliteConnection::open(unique_db_path("shared")).await?;
    conn.execute("CREATE TABLE t (id INTEGER PRIMARY KEY)", &[])
        .await?;

    let mut handles = Vec::new();
    for task in 0..4i64 {
        let conn = conn.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..25i64 {
                conn.execute(
                    "INSERT INTO t (id) VALUES (?1)",
                    &[RowValues::Int(task * 100 + i)],
                )
                .await?;
            }
            Ok::<(), SqliteAdapterError>(())
        }));
    }
    for h in handles {
        h.await??;
    }

    let row = conn
        .fetch_one("SELECT COUNT(*) AS cnt FROM t", &[])
        .await?
        .expect("count row");
    assert_eq!(*row.get("cnt").unwrap().as_int().unwrap(), 100);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn independent_connections_run_concurrently() -> Result<(), Box<dyn std::error::Error>> {
    let first = SqliteConnection::open(unique_db_path("left")).await?;
    let second = SqliteConnection::open(unique_db_path("right")).await?;

    let (a, b) = tokio::join!(
        first.run_batch(&[
            "CREATE TABLE t (id INTEGER PRIMARY KEY)",
            "INSERT INTO t (id) VALUES (1)",
        ]),
        second.run_batch(&[
            "CREATE TABLE t (id INTEGER PRIMARY KEY)",
            "INSERT INTO t (id) VALUES (2)",
        ]),
    );
    a?;
    b?;

    let left = first
        .fetch_one("SELECT id FROM t", &[])
        .await?
        .expect("row present");
    let right = second
        .fetch_one("SELECT id FROM t", &[])
        .await?
        .expect("row present");
    assert_eq!(*left.get("id").unwrap().as_int().unwrap(), 1);
    assert_eq!(*right.get("id").unwrap().as_int().unwrap(), 2);

    Ok(())
}
