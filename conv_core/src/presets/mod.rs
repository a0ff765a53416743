//! # Preset Workspaces
//!
//! A preset is a user-arranged canvas of converter and calculator widgets.
//! The layout is plain data; persisting it is delegated to a [`LayoutStore`].
//!
//! ## Structure
//!
//! ```text
//! PresetLayout
//! ├── id, name, version, created, modified
//! └── widgets: Vec<PresetWidget> (back-to-front z-order)
//!     └── tool: Converter { category } | Calculator { kind }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use conv_core::presets::{PresetLayout, WidgetTool};
//!
//! let mut preset = PresetLayout::new("Pump room");
//! let id = preset.add_widget(WidgetTool::converter("pressure"), 0.0, 0.0);
//! preset.move_widget(id, 240.0, 80.0).unwrap();
//! assert_eq!(preset.widget(id).unwrap().x, 240.0);
//! ```

pub mod store;

#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::CalculatorKind;
use crate::errors::{ConvError, ConvResult};

pub use store::{LayoutStore, MemoryLayoutStore, PresetSummary};

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileLayoutStore;

/// Current schema version for stored presets
pub const PRESET_SCHEMA_VERSION: &str = "0.1.0";

/// Default widget size in canvas pixels
pub const DEFAULT_WIDGET_SIZE: (f64, f64) = (320.0, 240.0);

/// Smallest size a widget can be resized to
pub const MIN_WIDGET_SIZE: (f64, f64) = (160.0, 120.0);

/// What a widget shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetTool {
    /// Converter for one quantity category
    Converter { category: String },
    /// One calculator
    Calculator { kind: CalculatorKind },
}

impl WidgetTool {
    /// Converter widget for a category id
    pub fn converter(category: impl Into<String>) -> Self {
        WidgetTool::Converter {
            category: category.into(),
        }
    }

    /// Calculator widget
    pub fn calculator(kind: CalculatorKind) -> Self {
        WidgetTool::Calculator { kind }
    }
}

/// One placed widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetWidget {
    pub id: Uuid,
    pub tool: WidgetTool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A saved workspace layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetLayout {
    pub id: Uuid,
    pub name: String,
    /// Schema version (for migration compatibility)
    pub version: String,
    /// Widgets in back-to-front order
    pub widgets: Vec<PresetWidget>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl PresetLayout {
    /// Create an empty preset
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        PresetLayout {
            id: Uuid::new_v4(),
            name: name.into(),
            version: PRESET_SCHEMA_VERSION.to_string(),
            widgets: Vec::new(),
            created: now,
            modified: now,
        }
    }

    /// Place a widget at the default size. Returns its id.
    ///
    /// Negative coordinates are clamped to the canvas origin.
    pub fn add_widget(&mut self, tool: WidgetTool, x: f64, y: f64) -> Uuid {
        let id = Uuid::new_v4();
        let (width, height) = DEFAULT_WIDGET_SIZE;
        self.widgets.push(PresetWidget {
            id,
            tool,
            x: clamp_coordinate(x),
            y: clamp_coordinate(y),
            width,
            height,
        });
        self.touch();
        id
    }

    /// Get a widget by id
    pub fn widget(&self, id: Uuid) -> Option<&PresetWidget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Drag a widget to a new position (clamped to the canvas origin)
    pub fn move_widget(&mut self, id: Uuid, x: f64, y: f64) -> ConvResult<()> {
        let widget = self.widget_mut(id)?;
        widget.x = clamp_coordinate(x);
        widget.y = clamp_coordinate(y);
        self.touch();
        Ok(())
    }

    /// Resize a widget, never below [`MIN_WIDGET_SIZE`]
    pub fn resize_widget(&mut self, id: Uuid, width: f64, height: f64) -> ConvResult<()> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ConvError::invalid_input(
                "size",
                format!("{}x{}", width, height),
                "Size must be finite",
            ));
        }
        let widget = self.widget_mut(id)?;
        widget.width = width.max(MIN_WIDGET_SIZE.0);
        widget.height = height.max(MIN_WIDGET_SIZE.1);
        self.touch();
        Ok(())
    }

    /// Move a widget to the top of the z-order
    pub fn bring_to_front(&mut self, id: Uuid) -> ConvResult<()> {
        let index = self.index_of(id)?;
        let widget = self.widgets.remove(index);
        self.widgets.push(widget);
        self.touch();
        Ok(())
    }

    /// Remove a widget, returning it
    pub fn remove_widget(&mut self, id: Uuid) -> ConvResult<PresetWidget> {
        let index = self.index_of(id)?;
        let widget = self.widgets.remove(index);
        self.touch();
        Ok(widget)
    }

    /// Rename the preset
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    fn index_of(&self, id: Uuid) -> ConvResult<usize> {
        self.widgets
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| ConvError::not_found("Widget", id.to_string()))
    }

    fn widget_mut(&mut self, id: Uuid) -> ConvResult<&mut PresetWidget> {
        self.widgets
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| ConvError::not_found("Widget", id.to_string()))
    }
}

fn clamp_coordinate(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preset() {
        let preset = PresetLayout::new("Commissioning");
        assert_eq!(preset.name, "Commissioning");
        assert_eq!(preset.version, PRESET_SCHEMA_VERSION);
        assert!(preset.widgets.is_empty());
        assert_eq!(preset.created, preset.modified);
    }

    #[test]
    fn test_add_and_move_clamps() {
        let mut preset = PresetLayout::new("p");
        let id = preset.add_widget(WidgetTool::converter("flow"), -10.0, 25.0);
        assert_eq!(preset.widget(id).unwrap().x, 0.0);
        assert_eq!(preset.widget(id).unwrap().y, 25.0);

        preset.move_widget(id, 100.0, -5.0).unwrap();
        let widget = preset.widget(id).unwrap();
        assert_eq!((widget.x, widget.y), (100.0, 0.0));

        preset.move_widget(id, f64::NAN, 10.0).unwrap();
        assert_eq!(preset.widget(id).unwrap().x, 0.0);
    }

    #[test]
    fn test_resize_minimum() {
        let mut preset = PresetLayout::new("p");
        let id = preset.add_widget(WidgetTool::calculator(CalculatorKind::Npsh), 0.0, 0.0);
        preset.resize_widget(id, 10.0, 500.0).unwrap();
        let widget = preset.widget(id).unwrap();
        assert_eq!((widget.width, widget.height), (MIN_WIDGET_SIZE.0, 500.0));
        assert!(preset.resize_widget(id, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_bring_to_front_and_remove() {
        let mut preset = PresetLayout::new("p");
        let a = preset.add_widget(WidgetTool::converter("mass"), 0.0, 0.0);
        let b = preset.add_widget(WidgetTool::converter("length"), 0.0, 0.0);

        preset.bring_to_front(a).unwrap();
        let order: Vec<_> = preset.widgets.iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, a]);

        let removed = preset.remove_widget(b).unwrap();
        assert_eq!(removed.id, b);
        assert_eq!(preset.widgets.len(), 1);
    }

    #[test]
    fn test_unknown_widget() {
        let mut preset = PresetLayout::new("p");
        let err = preset.move_widget(Uuid::new_v4(), 1.0, 1.0).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(preset.remove_widget(Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_serialization() {
        let mut preset = PresetLayout::new("p");
        preset.add_widget(WidgetTool::calculator(CalculatorKind::PumpPower), 10.0, 20.0);
        let json = serde_json::to_string(&preset).unwrap();
        assert!(json.contains(r#""type":"calculator""#));
        assert!(json.contains(r#""kind":"pump_power""#));

        let roundtrip: PresetLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, preset);
    }
}
