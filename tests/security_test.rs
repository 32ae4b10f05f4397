// ABOUTME: Security tests for literal escaping in generated INSERT statements
// ABOUTME: Replays exported SQL into a fresh database to prove hostile text stays inside its literal

use rusqlite::types::Value;
use rusqlite::Connection;
use sqlite_pg_export::export::export_table;
use sqlite_pg_export::sqlite;

const SCHEMA: &str = "CREATE TABLE TIPI_UTENTE (ID INTEGER, NOME TEXT, ATTIVO BOOLEAN);";

fn source_with_names(names: &[&str]) -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    for (idx, name) in names.iter().enumerate() {
        conn.execute(
            "INSERT INTO TIPI_UTENTE (ID, NOME, ATTIVO) VALUES (?1, ?2, 1)",
            rusqlite::params![idx as i64 + 1, name],
        )
        .unwrap();
    }
    conn
}

/// Execute exported statements against an empty copy of the schema
fn replay(statements: &[String]) -> Connection {
    let target = Connection::open_in_memory().unwrap();
    target.execute_batch(SCHEMA).unwrap();
    for stmt in statements {
        target.execute_batch(stmt).unwrap();
    }
    target
}

fn names(conn: &Connection) -> Vec<Value> {
    let mut stmt = conn
        .prepare("SELECT NOME FROM TIPI_UTENTE ORDER BY ID")
        .unwrap();
    stmt.query_map([], |row| row.get::<_, Value>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

// ============================================================================
// SQL Injection Prevention Tests
// ============================================================================

#[test]
fn test_injection_payloads_round_trip() {
    let payloads = [
        "O'Brien",
        "'; DROP TABLE TIPI_UTENTE; --",
        "Robert'); DELETE FROM TIPI_UTENTE; --",
        "''''",
        "' OR '1'='1",
        "back\\slash",
        "line\nbreak",
        "semi;colon",
    ];
    let source = source_with_names(&payloads);

    let statements = export_table(&source, "TIPI_UTENTE").unwrap();
    assert_eq!(statements.len(), payloads.len());

    let target = replay(&statements);

    let expected: Vec<Value> = payloads
        .iter()
        .map(|p| Value::Text(p.to_string()))
        .collect();
    assert_eq!(names(&target), expected);
}

#[test]
fn test_each_statement_is_a_single_insert() {
    let source = source_with_names(&["x'); DROP TABLE TIPI_UTENTE; --"]);

    let statements = export_table(&source, "TIPI_UTENTE").unwrap();
    let target = replay(&statements);

    let count: i64 = target
        .query_row("SELECT COUNT(*) FROM TIPI_UTENTE", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_boolean_and_null_literals_replay() {
    let source = Connection::open_in_memory().unwrap();
    source
        .execute_batch(&format!(
            "{}
            INSERT INTO TIPI_UTENTE VALUES (1, NULL, 'False');
            INSERT INTO TIPI_UTENTE VALUES (2, 'Guest', 'FALSE');
            INSERT INTO TIPI_UTENTE VALUES (3, 'Anon', NULL);",
            SCHEMA
        ))
        .unwrap();

    let statements = export_table(&source, "TIPI_UTENTE").unwrap();
    let target = replay(&statements);

    let mut stmt = target
        .prepare("SELECT NOME, ATTIVO FROM TIPI_UTENTE ORDER BY ID")
        .unwrap();
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, Value>(0)?, row.get::<_, Value>(1)?)))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(
        rows,
        vec![
            (Value::Null, Value::Integer(1)),
            (Value::Text("Guest".to_string()), Value::Integer(0)),
            (Value::Text("Anon".to_string()), Value::Null),
        ]
    );
}

// ============================================================================
// Path Validation Tests
// ============================================================================

#[test]
fn test_nonexistent_paths_rejected() {
    let paths = ["../../../nonexistent/secret.db", "/nonexistent/database.db", ""];

    for path in paths {
        assert!(
            sqlite::validate_sqlite_path(path).is_err(),
            "Path should be rejected: {:?}",
            path
        );
    }
}

#[test]
fn test_source_database_is_never_modified() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("source.db");
    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(&format!(
            "{} INSERT INTO TIPI_UTENTE VALUES (1, 'Admin', 1);",
            SCHEMA
        ))
        .unwrap();
    }

    let conn = sqlite::open_sqlite(&db_path).unwrap();
    export_table(&conn, "TIPI_UTENTE").unwrap();

    assert!(conn.execute("DELETE FROM TIPI_UTENTE", []).is_err());
}
