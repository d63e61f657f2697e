use libreria::db;
use libreria::domain::{
    AuthorRepository, CreateAuthorInput, CreateBookInput, CreateEditorialInput, DomainError,
    EditorialRepository, NewAuthor, NewEditorial, UpdateAuthorInput, UpdateBookInput,
    UpdateEditorialInput,
};
use libreria::infrastructure::AppState;
use libreria::services;

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

fn author_input(first_name: &str, last_name: &str, national_id: &str) -> CreateAuthorInput {
    CreateAuthorInput {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        national_id: national_id.to_string(),
        nationality: "Colombiana".to_string(),
    }
}

fn editorial_input(name: &str, tax_id: &str) -> CreateEditorialInput {
    CreateEditorialInput {
        name: name.to_string(),
        address: "Humberto Primo 555, Capital Federal".to_string(),
        tax_id: tax_id.to_string(),
    }
}

fn book_input(author_names: &[&str], editorial_id: i32) -> CreateBookInput {
    CreateBookInput {
        author_names: author_names.iter().map(|n| n.to_string()).collect(),
        editorial_id,
        title: "Cien Años de Soledad".to_string(),
        category: "Novela".to_string(),
        price: 20000.0,
        release_date: "2024-11-18T00:00:00.000Z".to_string(),
        description: "Macondo.".to_string(),
    }
}

// Seeds one editorial and one author, returning the editorial id
async fn seed_catalog(state: &AppState) -> i32 {
    let editorial = services::create_editorial(
        state.editorial_repo.as_ref(),
        editorial_input("Editorial Sudamericana", "20-12345678-9"),
    )
    .await
    .expect("Failed to create editorial");

    services::create_author(
        state.author_repo.as_ref(),
        author_input("Gabriel", "García Márquez", "12345678"),
    )
    .await
    .expect("Failed to create author");

    editorial.id
}

#[tokio::test]
async fn test_create_author_derives_full_name() {
    let state = setup_test_state().await;

    let author = services::create_author(
        state.author_repo.as_ref(),
        author_input("Gabriel", "García Márquez", "12345678"),
    )
    .await
    .unwrap();

    assert_eq!(author.full_name, "Gabriel García Márquez");

    let lone = services::create_author(state.author_repo.as_ref(), author_input("Borges", "", "7654321"))
        .await
        .unwrap();
    assert_eq!(lone.full_name, "Borges");

    let all = services::list_authors(state.author_repo.as_ref()).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_duplicate_national_id_is_conflict() {
    let state = setup_test_state().await;
    let repo = state.author_repo.as_ref();

    services::create_author(repo, author_input("Gabriel", "García Márquez", "12345678"))
        .await
        .unwrap();

    let err = services::create_author(repo, author_input("Julio", "Cortázar", "12345678"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn test_duplicate_full_name_is_conflict_whatever_the_split() {
    let state = setup_test_state().await;
    let repo = state.author_repo.as_ref();

    services::create_author(repo, author_input("Gabriel", "García", "1111111"))
        .await
        .unwrap();

    let err = services::create_author(repo, author_input("Gabriel García", "", "2222222"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn test_find_one_missing_is_not_found_for_every_family() {
    let state = setup_test_state().await;

    let err = services::get_author(state.author_repo.as_ref(), 999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = services::get_editorial(state.editorial_repo.as_ref(), 999)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = services::get_book(state.book_repo.as_ref(), 999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_remove_missing_and_existing() {
    let state = setup_test_state().await;
    let repo = state.author_repo.as_ref();

    let err = services::delete_author(repo, 42).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    let err = services::delete_editorial(state.editorial_repo.as_ref(), 42)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    let err = services::delete_book(state.book_repo.as_ref(), 42).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let author = services::create_author(repo, author_input("Julio", "Cortázar", "1234567"))
        .await
        .unwrap();
    services::delete_author(repo, author.id).await.unwrap();

    let err = services::get_author(repo, author.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_update_author_merges_and_rederives_full_name() {
    let state = setup_test_state().await;
    let repo = state.author_repo.as_ref();

    let author = services::create_author(repo, author_input("Gabriel", "García", "12345678"))
        .await
        .unwrap();

    let updated = services::update_author(
        repo,
        author.id,
        UpdateAuthorInput {
            last_name: Some("García Márquez".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.first_name, "Gabriel");
    assert_eq!(updated.full_name, "Gabriel García Márquez");
    assert_eq!(updated.national_id, "12345678");
    assert_eq!(updated.nationality, "Colombiana");

    // The stored key follows the rename, so the new name resolves
    let found = state
        .author_repo
        .find_by_full_names(&["Gabriel García Márquez".to_string()])
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_update_author_cannot_take_another_authors_keys() {
    let state = setup_test_state().await;
    let repo = state.author_repo.as_ref();

    services::create_author(repo, author_input("Gabriel", "García Márquez", "12345678"))
        .await
        .unwrap();
    let other = services::create_author(repo, author_input("Julio", "Cortázar", "7654321"))
        .await
        .unwrap();

    let err = services::update_author(
        repo,
        other.id,
        UpdateAuthorInput {
            national_id: Some("12345678".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    let err = services::update_author(
        repo,
        other.id,
        UpdateAuthorInput {
            first_name: Some("Gabriel".to_string()),
            last_name: Some("García Márquez".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    // Keeping its own keys is fine
    let same = services::update_author(
        repo,
        other.id,
        UpdateAuthorInput {
            nationality: Some("Argentina".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(same.nationality, "Argentina");

    let err = services::update_author(repo, 999, UpdateAuthorInput::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_editorial_tax_id_is_unique() {
    let state = setup_test_state().await;
    let repo = state.editorial_repo.as_ref();

    let first = services::create_editorial(repo, editorial_input("Sudamericana", "20-12345678-9"))
        .await
        .unwrap();
    let err = services::create_editorial(repo, editorial_input("Otra", "20-12345678-9"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    let second = services::create_editorial(repo, editorial_input("Alfaguara", "30-1234567-1"))
        .await
        .unwrap();

    let err = services::update_editorial(
        repo,
        second.id,
        UpdateEditorialInput {
            tax_id: Some(first.tax_id.clone()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    let renamed = services::update_editorial(
        repo,
        first.id,
        UpdateEditorialInput {
            name: Some("Editorial Sudamericana".to_string()),
            tax_id: Some(first.tax_id.clone()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(renamed.name, "Editorial Sudamericana");
    assert_eq!(renamed.address, first.address);
}

#[tokio::test]
async fn test_create_book_with_unknown_author_is_bad_request() {
    let state = setup_test_state().await;
    let editorial_id = seed_catalog(&state).await;

    let err = services::create_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        book_input(&["Unknown Person"], editorial_id),
    )
    .await
    .unwrap_err();

    match err {
        DomainError::BadRequest(message) => assert_eq!(message, "One or more authors not found."),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_book_rejects_empty_and_partial_author_lists() {
    let state = setup_test_state().await;
    let editorial_id = seed_catalog(&state).await;

    for names in [
        vec![],
        vec!["Gabriel García Márquez", "Unknown Person"],
        vec!["Gabriel García Márquez", "Gabriel García Márquez"],
    ] {
        let err = services::create_book(
            state.book_repo.as_ref(),
            state.author_repo.as_ref(),
            state.editorial_repo.as_ref(),
            book_input(&names, editorial_id),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(_)), "names: {names:?}");
    }

    assert!(services::list_books(state.book_repo.as_ref()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_book_with_unknown_editorial_is_not_found() {
    let state = setup_test_state().await;
    seed_catalog(&state).await;

    let err = services::create_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        book_input(&["Gabriel García Márquez"], 999),
    )
    .await
    .unwrap_err();

    match err {
        DomainError::NotFound(message) => assert_eq!(message, "Editorial not found."),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_book_populates_relations() {
    let state = setup_test_state().await;
    let editorial_id = seed_catalog(&state).await;
    services::create_author(
        state.author_repo.as_ref(),
        author_input("Mario", "Vargas Llosa", "2345678"),
    )
    .await
    .unwrap();

    let book = services::create_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        book_input(&["Mario Vargas Llosa", "Gabriel García Márquez"], editorial_id),
    )
    .await
    .unwrap();

    assert_eq!(book.authors.len(), 2);
    assert_eq!(book.editorial.as_ref().map(|e| e.id), Some(editorial_id));
    assert_eq!(book.release_date, "2024-11-18T00:00:00.000Z");

    let listed = services::list_books(state.book_repo.as_ref()).await.unwrap();
    assert_eq!(listed, vec![book.clone()]);

    let fetched = services::get_book(state.book_repo.as_ref(), book.id).await.unwrap();
    assert_eq!(fetched, book);
}

#[tokio::test]
async fn test_update_book_resolves_relations_and_merges_fields() {
    let state = setup_test_state().await;
    let editorial_id = seed_catalog(&state).await;
    services::create_author(
        state.author_repo.as_ref(),
        author_input("Mario", "Vargas Llosa", "2345678"),
    )
    .await
    .unwrap();
    let alfaguara = services::create_editorial(
        state.editorial_repo.as_ref(),
        editorial_input("Alfaguara", "30-1234567-1"),
    )
    .await
    .unwrap();

    let book = services::create_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        book_input(&["Gabriel García Márquez"], editorial_id),
    )
    .await
    .unwrap();

    let updated = services::update_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        book.id,
        UpdateBookInput {
            author_names: Some(vec!["Mario Vargas Llosa".to_string()]),
            editorial_id: Some(alfaguara.id),
            price: Some(25000.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.title, book.title);
    assert_eq!(updated.price, 25000.0);
    assert_eq!(updated.authors.len(), 1);
    assert_eq!(updated.authors[0].full_name, "Mario Vargas Llosa");
    assert_eq!(updated.editorial.map(|e| e.id), Some(alfaguara.id));

    let err = services::update_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        book.id,
        UpdateBookInput {
            editorial_id: Some(999),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = services::update_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        book.id,
        UpdateBookInput {
            author_names: Some(vec!["Unknown Person".to_string()]),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::BadRequest(_)));

    // A rejected update leaves the book as it was
    let current = services::get_book(state.book_repo.as_ref(), book.id).await.unwrap();
    assert_eq!(current.authors[0].full_name, "Mario Vargas Llosa");

    let err = services::update_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        999,
        UpdateBookInput::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_deleting_referenced_records_keeps_the_book() {
    let state = setup_test_state().await;
    let editorial_id = seed_catalog(&state).await;

    let book = services::create_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        book_input(&["Gabriel García Márquez"], editorial_id),
    )
    .await
    .unwrap();

    services::delete_editorial(state.editorial_repo.as_ref(), editorial_id)
        .await
        .unwrap();
    services::delete_author(state.author_repo.as_ref(), book.authors[0].id)
        .await
        .unwrap();

    let orphan = services::get_book(state.book_repo.as_ref(), book.id).await.unwrap();
    assert!(orphan.editorial.is_none());
    assert!(orphan.authors.is_empty());

    services::delete_book(state.book_repo.as_ref(), book.id).await.unwrap();
    let err = services::get_book(state.book_repo.as_ref(), book.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_demo_seed_is_idempotent() {
    let state = setup_test_state().await;

    libreria::seed::seed_demo_data(&state).await.unwrap();
    libreria::seed::seed_demo_data(&state).await.unwrap();

    let books = services::list_books(state.book_repo.as_ref()).await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].release_date, "1967-05-30T00:00:00.000Z");
    assert_eq!(books[0].authors[0].full_name, "Gabriel García Márquez");
    assert_eq!(
        services::list_editorials(state.editorial_repo.as_ref()).await.unwrap().len(),
        1
    );
}

fn new_author(full_name: &str, national_id: &str) -> NewAuthor {
    let (first_name, last_name) = full_name.split_once(' ').unwrap_or((full_name, ""));
    NewAuthor {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        full_name: full_name.to_string(),
        national_id: national_id.to_string(),
        nationality: "Argentina".to_string(),
    }
}

#[tokio::test]
async fn test_unique_columns_reject_duplicates_written_directly() {
    let state = setup_test_state().await;

    // Straight to the repositories, so only the UNIQUE columns stand in the way
    state
        .author_repo
        .create(new_author("Ana Bravo", "1234567"))
        .await
        .unwrap();

    let err = state
        .author_repo
        .create(new_author("Carla Diaz", "1234567"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");

    let err = state
        .author_repo
        .create(new_author("Ana Bravo", "7654321"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");

    let editorial = NewEditorial {
        name: "Sudamericana".to_string(),
        address: "Humberto Primo 555".to_string(),
        tax_id: "20-12345678-9".to_string(),
    };
    state.editorial_repo.create(editorial.clone()).await.unwrap();

    let err = state
        .editorial_repo
        .create(NewEditorial {
            name: "Otra".to_string(),
            ..editorial
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");

    assert_eq!(
        services::list_authors(state.author_repo.as_ref()).await.unwrap().len(),
        1
    );
}
