use super::*;

#[test]
fn seeded_table_authenticates_both_demo_accounts() {
    let table = UserTable::seeded();

    let admin = table.authenticate("admin", "password123").expect("admin");
    assert_eq!(admin.id, 1);
    assert_eq!(admin.name, "John Doe");

    let user = table.authenticate("user", "user123").expect("user");
    assert_eq!(user.id, 2);
    assert_eq!(user.name, "Jane Smith");
}

#[test]
fn authenticate_requires_exact_match_on_both_fields() {
    let table = UserTable::seeded();

    assert!(table.authenticate("admin", "wrongpass").is_none());
    assert!(table.authenticate("Admin", "password123").is_none());
    assert!(table.authenticate("admin", "password123 ").is_none());
    assert!(table.authenticate("admin", "user123").is_none());
    assert!(table.authenticate("", "").is_none());
}

#[test]
fn first_matching_row_wins() {
    let table = UserTable::new(vec![
        User {
            id: 7,
            username: "dup".to_string(),
            password: "pw".to_string(),
            name: "First".to_string(),
        },
        User {
            id: 8,
            username: "dup".to_string(),
            password: "pw".to_string(),
            name: "Second".to_string(),
        },
    ]);

    let found = table.authenticate("dup", "pw").expect("match");
    assert_eq!(found.id, 7);
    assert_eq!(table.usernames().collect::<Vec<_>>(), vec!["dup", "dup"]);
}
