//! Command handlers for the td CLI.
//!
//! Every handler runs one load-mutate-save cycle against a [`ListStorage`]
//! and leaves process exit codes to `main`.

use std::path::PathBuf;

use td_core::{ListStorage, Result, TdError, Todo, AUTO_PRIORITY};

/// Environment variable redirecting the config directory.
///
/// Used by integration tests to isolate themselves from the user's real
/// todo list. Not part of the advertised CLI surface.
pub const CONFIG_DIR_ENV: &str = "TD_CONFIG_DIR";

/// Resolve the storage location, honoring the [`CONFIG_DIR_ENV`] override.
pub fn resolve_storage() -> Result<ListStorage> {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => Ok(ListStorage::new(PathBuf::from(dir))),
        None => ListStorage::new_default(),
    }
}

/// Print the title of the current (first) todo.
///
/// An empty list prints the "Empty!" placeholder rather than failing.
pub fn show_first(storage: &ListStorage) -> Result<()> {
    let list = storage.load()?;
    println!("{}", list.first().title);
    Ok(())
}

/// Print every todo title, one per line.
///
/// Returns the process exit code: an empty list is reported on stderr and
/// exits non-zero.
pub fn ls(storage: &ListStorage) -> Result<i32> {
    let list = storage.load()?;

    if list.is_empty() {
        eprintln!("List is empty!");
        return Ok(1);
    }

    for todo in list.iter() {
        println!("{}", todo.title);
    }
    Ok(0)
}

/// Add a new todo with an auto-assigned priority and persist the list.
pub fn add(storage: &ListStorage, title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TdError::invalid_argument("todo title cannot be empty"));
    }

    let mut list = storage.load()?;
    list.push(Todo::new(title, AUTO_PRIORITY));
    storage.save(&list)?;

    tracing::debug!("added todo '{title}'");
    Ok(())
}

/// Remove the current (first) todo and persist the list.
pub fn pop(storage: &ListStorage) -> Result<()> {
    let mut list = storage.load()?;
    list.pop();
    storage.save(&list)
}

/// Empty the todo list and persist it.
pub fn clear(storage: &ListStorage) -> Result<()> {
    let mut list = storage.load()?;
    list.clear();
    storage.save(&list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_add_rejects_empty_title() {
        let temp = TempDir::new().unwrap();
        let storage = ListStorage::new(temp.path().to_path_buf());

        let err = add(&storage, "   ").unwrap_err();
        assert!(matches!(err, TdError::InvalidArgument(_)));

        // No I/O happened: nothing was written
        assert!(!storage.exists());
    }

    #[test]
    fn test_add_persists_todo() {
        let temp = TempDir::new().unwrap();
        let storage = ListStorage::new(temp.path().to_path_buf());

        add(&storage, "buy milk").unwrap();

        let list = storage.load().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.first().title, "buy milk");
    }

    #[test]
    fn test_pop_on_empty_persists_empty_list() {
        let temp = TempDir::new().unwrap();
        let storage = ListStorage::new(temp.path().to_path_buf());

        pop(&storage).unwrap();

        assert!(storage.exists());
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_clear_persists_empty_list() {
        let temp = TempDir::new().unwrap();
        let storage = ListStorage::new(temp.path().to_path_buf());

        add(&storage, "a").unwrap();
        add(&storage, "b").unwrap();
        clear(&storage).unwrap();

        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn test_resolve_storage_honors_env_override() {
        let temp = TempDir::new().unwrap();
        let original = std::env::var_os(CONFIG_DIR_ENV);

        std::env::set_var(CONFIG_DIR_ENV, temp.path());
        let storage = resolve_storage().unwrap();
        assert_eq!(storage.config_dir(), temp.path());

        match original {
            Some(v) => std::env::set_var(CONFIG_DIR_ENV, v),
            None => std::env::remove_var(CONFIG_DIR_ENV),
        }
    }
}
