//! Shared in-memory settings record.

use std::sync::{Mutex, MutexGuard};

use crate::settings::user::{SettingField, UserSettings};

/// One user's settings, shared between request handlers.
#[derive(Debug, Default)]
pub struct SettingsStore {
    inner: Mutex<UserSettings>,
}

impl SettingsStore {
    pub fn new(settings: UserSettings) -> Self {
        Self {
            inner: Mutex::new(settings),
        }
    }

    /// Copy of the current record.
    pub fn snapshot(&self) -> UserSettings {
        self.lock().clone()
    }

    /// Apply one toggle and return the updated record.
    pub fn update(&self, field: SettingField, value: bool) -> UserSettings {
        let mut settings = self.lock();
        settings.set(field, value);
        tracing::debug!(field = %field, value, "Setting updated");
        settings.clone()
    }

    fn lock(&self) -> MutexGuard<'_, UserSettings> {
        // A panic mid-update cannot leave a half-written bool behind.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_is_visible_in_snapshot() {
        let store = SettingsStore::default();
        let updated = store.update(SettingField::TwoFactor, true);
        assert!(updated.two_factor_enabled);
        assert_eq!(store.snapshot(), updated);
    }

    #[test]
    fn test_new_keeps_supplied_record() {
        let mut record = UserSettings::default();
        record.full_name = "Ada Lovelace".into();
        record.privacy.show_activity = false;

        let store = SettingsStore::new(record.clone());
        assert_eq!(store.snapshot(), record);
        assert!(store.update(SettingField::ShowActivity, true).privacy.show_activity);
    }
}
