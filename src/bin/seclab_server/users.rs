/// A row of the static user table. Passwords are stored in plaintext.
#[derive(Clone, Debug)]
pub(crate) struct User {
    pub(crate) id: u64,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) name: String,
}

pub(crate) struct UserTable {
    users: Vec<User>,
}

impl UserTable {
    pub(crate) fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub(crate) fn seeded() -> Self {
        Self::new(vec![
            User {
                id: 1,
                username: "admin".to_string(),
                password: "password123".to_string(),
                name: "John Doe".to_string(),
            },
            User {
                id: 2,
                username: "user".to_string(),
                password: "user123".to_string(),
                name: "Jane Smith".to_string(),
            },
        ])
    }

    pub(crate) fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(|u| u.username.as_str())
    }

    /// Exact match on both fields; first match wins. No rate limiting or lockout.
    pub(crate) fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
    }
}

#[cfg(test)]
#[path = "../../tests/bin/seclab_server/users_tests.rs"]
mod tests;
