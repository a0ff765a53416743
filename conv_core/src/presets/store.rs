//! Persistence seam for preset layouts.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PresetLayout;
use crate::errors::{ConvError, ConvResult};

/// Listing row for a stored preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetSummary {
    pub id: Uuid,
    pub name: String,
    pub widget_count: usize,
    pub modified: DateTime<Utc>,
}

impl From<&PresetLayout> for PresetSummary {
    fn from(preset: &PresetLayout) -> Self {
        PresetSummary {
            id: preset.id,
            name: preset.name.clone(),
            widget_count: preset.widgets.len(),
            modified: preset.modified,
        }
    }
}

/// Where presets live.
///
/// `save` inserts or replaces by id. `list` returns the most recently
/// modified preset first.
pub trait LayoutStore {
    fn save(&mut self, preset: &PresetLayout) -> ConvResult<()>;
    fn load(&self, id: Uuid) -> ConvResult<PresetLayout>;
    fn list(&self) -> ConvResult<Vec<PresetSummary>>;
    fn delete(&mut self, id: Uuid) -> ConvResult<()>;
}

/// In-process store, used by tests and by front-ends without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryLayoutStore {
    presets: HashMap<Uuid, PresetLayout>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn save(&mut self, preset: &PresetLayout) -> ConvResult<()> {
        self.presets.insert(preset.id, preset.clone());
        Ok(())
    }

    fn load(&self, id: Uuid) -> ConvResult<PresetLayout> {
        self.presets
            .get(&id)
            .cloned()
            .ok_or_else(|| ConvError::not_found("Preset", id.to_string()))
    }

    fn list(&self) -> ConvResult<Vec<PresetSummary>> {
        let mut summaries: Vec<PresetSummary> = self.presets.values().map(PresetSummary::from).collect();
        sort_summaries(&mut summaries);
        Ok(summaries)
    }

    fn delete(&mut self, id: Uuid) -> ConvResult<()> {
        self.presets
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ConvError::not_found("Preset", id.to_string()))
    }
}

/// Newest first, then by name for a stable order.
pub(crate) fn sort_summaries(summaries: &mut [PresetSummary]) {
    summaries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
}
