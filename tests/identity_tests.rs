use shiftlog::core::identity::IdentityBook;
use shiftlog::errors::AppError;
use shiftlog::models::identity::Identity;
use shiftlog::store::mem::MemTable;

#[test]
fn lookup_after_upsert_returns_the_name() {
    let table: MemTable<Identity> = MemTable::new();
    let book = IdentityBook::new(table.clone());

    book.upsert("42", "Alice Smith").unwrap();

    assert_eq!(book.lookup("42").unwrap().as_deref(), Some("Alice Smith"));
}

#[test]
fn lookup_unknown_user_is_none() {
    let book = IdentityBook::new(MemTable::<Identity>::new());
    assert_eq!(book.lookup("missing").unwrap(), None);
}

#[test]
fn reregistering_overwrites_in_place_never_duplicates() {
    let table: MemTable<Identity> = MemTable::new();
    let book = IdentityBook::new(table.clone());

    book.upsert("42", "Alice Smith").unwrap();
    book.upsert("42", "Alice Jones").unwrap();

    let rows = table.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, "42");
    assert_eq!(rows[0].name, "Alice Jones");
}

#[test]
fn empty_name_is_accepted() {
    let table: MemTable<Identity> = MemTable::new();
    let book = IdentityBook::new(table.clone());

    book.upsert("7", "").unwrap();

    assert_eq!(book.lookup("7").unwrap().as_deref(), Some(""));
}

#[test]
fn upsert_keeps_other_users_untouched() {
    let table = MemTable::with_rows(vec![
        Identity::new("1", "Alice"),
        Identity::new("2", "Bob"),
    ]);
    let book = IdentityBook::new(table.clone());

    book.upsert("2", "Robert").unwrap();

    let rows = table.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[1].name, "Robert");
}

#[test]
fn unreachable_store_surfaces_as_storage_error() {
    let table: MemTable<Identity> = MemTable::new();
    let book = IdentityBook::new(table.clone());
    table.poison();

    assert!(matches!(
        book.lookup("42").unwrap_err(),
        AppError::Storage(_)
    ));
    assert!(matches!(
        book.upsert("42", "Alice").unwrap_err(),
        AppError::Storage(_)
    ));
}
