use anyhow::Result;
use tracing::info;

use barangay_db::Database;
use barangay_types::models::Role;

/// Accounts every installation starts with: (username, password, full name,
/// employee id, role).
const DEFAULT_ACCOUNTS: [(&str, &str, &str, &str, Role); 2] = [
    ("admin", "password123", "System Administrator", "ADM1-0001", Role::Administrator),
    ("juan", "password123", "Juan Dela Cruz", "TRK0-0005", Role::GarbageCollector),
];

/// Register any missing default account, then rewrite `users.txt` so legacy
/// five-column rows come out in the current layout.
pub fn default_accounts(db: &Database) -> Result<usize> {
    db.with_accounts(|accounts| {
        let mut created = 0;
        for (username, password, full_name, employee_id, role) in DEFAULT_ACCOUNTS {
            if !accounts.user_exists(username)
                && accounts.register(username, password, full_name, employee_id, role)
            {
                info!("Seeded default account {}", username);
                created += 1;
            }
        }
        accounts.save_all();
        created
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_once_and_normalizes_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("users.txt"),
            "admin|changed|System Administrator|ADM1-0001|Administrator\n",
        )
        .unwrap();

        let db = Database::open(tmp.path()).unwrap();
        assert_eq!(default_accounts(&db).unwrap(), 1);
        assert_eq!(default_accounts(&db).unwrap(), 0);

        let text = std::fs::read_to_string(tmp.path().join("users.txt")).unwrap();
        assert_eq!(
            text,
            "admin|changed|System Administrator|ADM1-0001|Administrator|false\n\
             juan|password123|Juan Dela Cruz|TRK0-0005|Garbage Collector|false\n"
        );
    }

    #[test]
    fn seeding_keeps_rows_with_unknown_roles() {
        let tmp = tempfile::tempdir().unwrap();
        let pedro = "pedro|pw|Pedro Penduko|SUP1-0001|Supervisor|false";
        std::fs::write(tmp.path().join("users.txt"), format!("{pedro}\n")).unwrap();

        let db = Database::open(tmp.path()).unwrap();
        assert_eq!(default_accounts(&db).unwrap(), 2);

        let text = std::fs::read_to_string(tmp.path().join("users.txt")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.contains(&pedro));
    }
}
