use sqlite_adapter::prelude::*;

async fn table(conn: &SqliteConnection) -> Result<(), SqliteAdapterError> {
    conn.execute("CREATE TABLE t (id INTEGER PRIMARY KEY, v TEXT)", &[])
        .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn parameter_sets_apply_in_input_order() -> Result<(), Box<dyn std::error::Error>> {
    let conn = SqliteConnection::open(":memory:").await?;
    conn.execute(
        "CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT, v TEXT)",
        &[],
    )
    .await?;

    let sets = vec![
        vec![RowValues::Text("a".into())],
        vec![RowValues::Text("b".into())],
        vec![RowValues::Text("c".into())],
    ];
    conn.execute_prepared("INSERT INTO t (v) VALUES (?1)", &sets)
        .await?;

    let rs = conn.fetch_many("SELECT v FROM t ORDER BY id", &[]).await?;
    let values: Vec<&str> = rs
        .rows
        .iter()
        .map(|row| row.get("v").unwrap().as_text().unwrap())
        .collect();
    assert_eq!(values, ["a", "b", "c"]);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn compile_failure_short_circuits() -> Result<(), Box<dyn std::error::Error>> {
    let conn = SqliteConnection::open(":memory:").await?;
    table(&conn).await?;

    let sets = vec![vec![RowValues::Int(1)]];
    let err = conn
        .execute_prepared("INSERT INTO nowhere (id) VALUES (?1)", &sets)
        .await
        .unwrap_err();
    assert!(format!("{err}").contains("nowhere"));

    // No set was applied anywhere.
    let rs = conn.fetch_many("SELECT * FROM t", &[]).await?;
    assert!(rs.is_empty());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn per_set_failures_do_not_abort_remaining_sets() -> Result<(), Box<dyn std::error::Error>> {
    let conn = SqliteConnection::open(":memory:").await?;
    table(&conn).await?;

    // The second set violates the primary key; the operation still reports
    // success and the third set still runs.
    let sets = vec![
        vec![RowValues::Int(1), RowValues::Text("a".into())],
        vec![RowValues::Int(1), RowValues::Text("dup".into())],
        vec![RowValues::Int(2), RowValues::Text("c".into())],
    ];
    conn.execute_prepared("INSERT INTO t (id, v) VALUES (?1, ?2)", &sets)
        .await?;

    let rs = conn.fetch_many("SELECT id, v FROM t ORDER BY id", &[]).await?;
    assert_eq!(rs.len(), 2);
    assert_eq!(rs.rows[0].get("v").unwrap().as_text().unwrap(), "a");
    assert_eq!(rs.rows[1].get("v").unwrap().as_text().unwrap(), "c");

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn empty_parameter_set_list_compiles_and_does_nothing()
-> Result<(), Box<dyn std::error::Error>> {
    let conn = SqliteConnection::open(":memory:").await?;
    table(&conn).await?;

    conn.execute_prepared("INSERT INTO t (id, v) VALUES (?1, ?2)", &[])
        .await?;

    let rs = conn.fetch_many("SELECT * FROM t", &[]).await?;
    assert!(rs.is_empty());

    Ok(())
}
