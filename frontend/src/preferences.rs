// Persisted view preferences: list ordering, stage filter and the last
// detail tab survive a reload.

use gloo_storage::{LocalStorage, Storage};
use salescrm_shared::{DetailTab, SortKey, StageFilter};
use serde::{Deserialize, Serialize};

const PREFERENCES_STORAGE_KEY: &str = "salescrm_view_preferences";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewPreferences {
    pub sort_by: SortKey,
    pub stage_filter: StageFilter,
    pub detail_tab: DetailTab,
}

/// Load preferences from local storage or return defaults
pub fn load_preferences() -> ViewPreferences {
    match LocalStorage::get::<ViewPreferences>(PREFERENCES_STORAGE_KEY) {
        Ok(preferences) => preferences,
        Err(err) => {
            log::debug!("using default view preferences: {}", err);
            ViewPreferences::default()
        }
    }
}

/// Save preferences to local storage
pub fn save_preferences(preferences: &ViewPreferences) {
    if let Err(err) = LocalStorage::set(PREFERENCES_STORAGE_KEY, preferences) {
        log::warn!("failed to save view preferences: {}", err);
    }
}
