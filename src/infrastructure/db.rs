use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    run_migrations(&db).await?;

    Ok(db)
}

const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS authors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        full_name TEXT NOT NULL UNIQUE,
        national_id TEXT NOT NULL UNIQUE,
        nationality TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS editorials (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        tax_id TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        category TEXT NOT NULL,
        price REAL NOT NULL,
        release_date TEXT NOT NULL,
        description TEXT NOT NULL,
        editorial_id INTEGER,
        FOREIGN KEY (editorial_id) REFERENCES editorials(id) ON DELETE SET NULL
    )
    "#,
    // Links belong to the book; removing either side drops them.
    r#"
    CREATE TABLE IF NOT EXISTS book_authors (
        book_id INTEGER NOT NULL,
        author_id INTEGER NOT NULL,
        PRIMARY KEY (book_id, author_id),
        FOREIGN KEY (book_id) REFERENCES books(id) ON DELETE CASCADE,
        FOREIGN KEY (author_id) REFERENCES authors(id) ON DELETE CASCADE
    )
    "#,
];

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    for statement in SCHEMA {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            statement.to_owned(),
        ))
        .await?;
    }

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_books_editorial_id ON books(editorial_id)".to_owned(),
    ))
    .await?;

    tracing::debug!("Database schema is up to date");
    Ok(())
}
