/* tests/file_tests.rs */

#![cfg(feature = "fs")]

use cfr::{Cfr, FileStorage, Storage};

#[test]
fn test_file_scenario() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("settings.cfr");
	std::fs::write(&path, "")?;

	let mut cfr = Cfr::open(&path);
	cfr.create_holder("UserSettings")?;
	assert_eq!(std::fs::read_to_string(&path)?, "UserSettings {\n}\n");

	cfr.create_property("UserSettings", "Theme", "dark")?;
	cfr.create_property("UserSettings", "Language", "en")?;
	cfr.update_property("UserSettings", "Theme", "light")?;
	assert_eq!(
		std::fs::read_to_string(&path)?,
		"UserSettings {\n\tTheme : light\n\tLanguage : en\n}\n"
	);

	// A fresh handle sees the same content; nothing is cached.
	let reader = Cfr::open(&path);
	assert_eq!(reader.get_property_value("UserSettings", "Theme")?, "light");

	cfr.delete_holder("UserSettings")?;
	assert!(reader.get_holders()?.is_empty());
	Ok(())
}

#[test]
fn test_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.cfr");

	let mut cfr = Cfr::open(&path);
	assert!(cfr.get_holders().unwrap_err().is_storage_not_found());
	assert!(cfr.create_holder("A").unwrap_err().is_storage_not_found());
	assert!(!path.exists());
}

#[test]
fn test_atomic_write_leaves_no_temp_files() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("app.cfr");
	std::fs::write(&path, "A {\n}\n")?;

	let mut cfr = Cfr::open(&path);
	for i in 0..5 {
		cfr.create_property("A", &format!("k{i}"), &format!("v{i}"))?;
	}

	let entries: Vec<_> = std::fs::read_dir(dir.path())?
		.filter_map(|e| e.ok())
		.map(|e| e.file_name().to_string_lossy().into_owned())
		.collect();
	assert_eq!(entries, vec!["app.cfr".to_string()]);
	assert_eq!(cfr.read_holder("A")?.len(), 5);
	Ok(())
}

#[test]
fn test_in_place_write() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("plain.cfr");
	std::fs::write(&path, "A {\n\tk : v\n}\n")?;

	let mut cfr = Cfr::new(FileStorage::new(&path).atomic(false));
	cfr.update_property("A", "k", "a much longer value")?;
	cfr.update_property("A", "k", "s")?;
	assert_eq!(std::fs::read_to_string(&path)?, "A {\n\tk : s\n}\n");
	Ok(())
}

#[test]
fn test_locked_storage() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("shared.cfr");
	std::fs::write(&path, "")?;

	let storage = FileStorage::new(&path).locked(true);
	let lock_path = storage.lock_path().unwrap();
	assert_eq!(lock_path, dir.path().join(".shared.cfr.lock"));

	let mut cfr = Cfr::new(storage);
	cfr.create_holder("A")?;
	cfr.create_property("A", "k", "v")?;
	assert!(lock_path.exists());

	// The lock is released after each call.
	let guard = cfr.storage().lock()?;
	assert!(guard.is_some());
	drop(guard);
	cfr.delete_property("A", "k")?;
	assert_eq!(std::fs::read_to_string(&path)?, "A {\n}\n");
	Ok(())
}

#[test]
fn test_locked_missing_file_leaves_no_sidecar() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.cfr");

	let mut cfr = Cfr::new(FileStorage::new(&path).locked(true));
	assert!(cfr.create_holder("A").unwrap_err().is_storage_not_found());
	assert!(cfr.delete_holder("A").unwrap_err().is_storage_not_found());

	let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
	assert!(entries.is_empty());
}

#[test]
fn test_lock_path_without_file_name() {
	assert_eq!(FileStorage::new("..").lock_path(), None);
	assert_eq!(FileStorage::new("/").lock_path(), None);
	assert_eq!(
		FileStorage::new("conf/app.cfr").lock_path(),
		Some(std::path::PathBuf::from("conf/.app.cfr.lock"))
	);

	let storage = FileStorage::new("..").locked(true);
	assert!(matches!(storage.lock(), Err(cfr::StorageError::NotFound { .. })));
}

#[test]
fn test_concurrent_locked_writers() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("counter.cfr");
	std::fs::write(&path, "Counter {\n}\n")?;

	let handles: Vec<_> = (0..4)
		.map(|thread_id| {
			let path = path.clone();
			std::thread::spawn(move || {
				let mut cfr = Cfr::new(FileStorage::new(path).locked(true));
				for i in 0..5 {
					cfr.create_property("Counter", &format!("t{thread_id}_{i}"), "1")
						.unwrap();
				}
			})
		})
		.collect();

	for handle in handles {
		handle.join().expect("Thread should not panic");
	}

	// With the lock held across read-modify-write, no update is lost.
	let cfr = Cfr::open(&path);
	assert_eq!(cfr.read_holder("Counter")?.len(), 20);
	Ok(())
}

#[cfg(unix)]
#[test]
fn test_atomic_write_keeps_permissions() -> Result<(), Box<dyn std::error::Error>> {
	use std::os::unix::fs::PermissionsExt;

	let dir = tempfile::tempdir()?;
	let path = dir.path().join("perm.cfr");
	std::fs::write(&path, "A {\n}\n")?;
	std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640))?;

	let mut cfr = Cfr::open(&path);
	cfr.create_holder("B")?;
	let mode = std::fs::metadata(&path)?.permissions().mode() & 0o777;
	assert_eq!(mode, 0o640);
	Ok(())
}
