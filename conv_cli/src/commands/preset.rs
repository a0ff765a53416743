//! Preset workspace commands.

use clap::{Args, Subcommand};
use conv_core::calculations::CalculatorKind;
use conv_core::presets::{FileLayoutStore, LayoutStore, PresetLayout, PresetWidget, WidgetTool};
use conv_core::{ConvError, ConvResult, Settings, REGISTRY};
use tabled::Tabled;
use uuid::Uuid;

use crate::output::{self, OutputFormat};

/// Arguments for preset commands
#[derive(Debug, Args)]
pub struct PresetArgs {
    /// Preset subcommand
    #[command(subcommand)]
    pub command: PresetCommand,
}

/// Preset subcommands
#[derive(Debug, Subcommand)]
pub enum PresetCommand {
    /// Create an empty preset
    New {
        /// Preset name
        name: String,
    },
    /// List saved presets
    List,
    /// Show a preset's widgets
    Show {
        /// Preset ID
        id: Uuid,
    },
    /// Place a converter or calculator widget
    Add {
        /// Preset ID
        id: Uuid,
        /// Converter category id
        #[arg(long, conflicts_with = "calculator", required_unless_present = "calculator")]
        converter: Option<String>,
        /// Calculator id (e.g. npsh, pump-power)
        #[arg(long)]
        calculator: Option<String>,
        /// Left edge on the canvas
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        x: f64,
        /// Top edge on the canvas
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        y: f64,
    },
    /// Move a widget
    Move {
        /// Preset ID
        id: Uuid,
        /// Widget ID
        widget: Uuid,
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
    /// Resize a widget
    Resize {
        /// Preset ID
        id: Uuid,
        /// Widget ID
        widget: Uuid,
        width: f64,
        height: f64,
    },
    /// Bring a widget to the front
    Front {
        /// Preset ID
        id: Uuid,
        /// Widget ID
        widget: Uuid,
    },
    /// Remove a widget
    Remove {
        /// Preset ID
        id: Uuid,
        /// Widget ID
        widget: Uuid,
    },
    /// Delete a preset
    Delete {
        /// Preset ID
        id: Uuid,
    },
}

/// Preset display row
#[derive(Debug, Tabled)]
struct PresetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Widgets")]
    widgets: usize,
    #[tabled(rename = "Modified")]
    modified: String,
}

/// Widget display row
#[derive(Debug, Tabled)]
struct WidgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Tool")]
    tool: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Size")]
    size: String,
}

impl From<&PresetWidget> for WidgetRow {
    fn from(widget: &PresetWidget) -> Self {
        let tool = match &widget.tool {
            WidgetTool::Converter { category } => format!("converter: {}", category),
            WidgetTool::Calculator { kind } => format!("calculator: {}", kind.metadata().id),
        };
        WidgetRow {
            id: widget.id.to_string(),
            tool,
            position: format!("{}, {}", widget.x, widget.y),
            size: format!("{} x {}", widget.width, widget.height),
        }
    }
}

fn widget_tool(converter: Option<&str>, calculator: Option<&str>) -> ConvResult<WidgetTool> {
    match (converter, calculator) {
        (Some(category), None) => {
            let category = REGISTRY.category(category)?;
            Ok(WidgetTool::converter(category.id.clone()))
        }
        (None, Some(id)) => CalculatorKind::from_id(id)
            .map(WidgetTool::calculator)
            .ok_or_else(|| ConvError::not_found("Calculator", id)),
        _ => Err(ConvError::invalid_input(
            "tool",
            "",
            "Give exactly one of --converter or --calculator",
        )),
    }
}

/// Load, edit and save one preset
fn update(
    store: &mut FileLayoutStore,
    id: Uuid,
    edit: impl FnOnce(&mut PresetLayout) -> ConvResult<()>,
) -> ConvResult<()> {
    let mut preset = store.load(id)?;
    edit(&mut preset)?;
    store.save(&preset)
}

/// Execute preset commands
pub fn execute(args: &PresetArgs, settings: &Settings, format: OutputFormat) -> ConvResult<()> {
    let mut store = FileLayoutStore::open(&settings.presets.directory)?;

    match &args.command {
        PresetCommand::New { name } => {
            let preset = PresetLayout::new(name.as_str());
            store.save(&preset)?;
            match format {
                OutputFormat::Table => output::print_success(&format!("Created preset '{}' ({})", name, preset.id)),
                OutputFormat::Json => output::print_json(&preset),
            }
        }
        PresetCommand::List => {
            let summaries = store.list()?;
            let rows: Vec<PresetRow> = summaries
                .iter()
                .map(|s| PresetRow {
                    id: s.id.to_string(),
                    name: s.name.clone(),
                    widgets: s.widget_count,
                    modified: s.modified.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();
            output::print_list(&rows, &summaries, format);
        }
        PresetCommand::Show { id } => {
            let preset = store.load(*id)?;
            if format == OutputFormat::Table {
                output::print_kv("Name", &preset.name);
                output::print_kv("Modified", &preset.modified.to_rfc3339());
                let rows: Vec<WidgetRow> = preset.widgets.iter().map(WidgetRow::from).collect();
                output::print_list(&rows, &preset, format);
            } else {
                output::print_json(&preset);
            }
        }
        PresetCommand::Add {
            id,
            converter,
            calculator,
            x,
            y,
        } => {
            let tool = widget_tool(converter.as_deref(), calculator.as_deref())?;
            let mut widget_id = Uuid::nil();
            update(&mut store, *id, |preset| {
                widget_id = preset.add_widget(tool, *x, *y);
                Ok(())
            })?;
            output::print_success(&format!("Added widget {}", widget_id));
        }
        PresetCommand::Move { id, widget, x, y } => {
            update(&mut store, *id, |preset| preset.move_widget(*widget, *x, *y))?;
            output::print_success(&format!("Moved widget {}", widget));
        }
        PresetCommand::Resize {
            id,
            widget,
            width,
            height,
        } => {
            update(&mut store, *id, |preset| preset.resize_widget(*widget, *width, *height))?;
            output::print_success(&format!("Resized widget {}", widget));
        }
        PresetCommand::Front { id, widget } => {
            update(&mut store, *id, |preset| preset.bring_to_front(*widget))?;
            output::print_success(&format!("Widget {} brought to front", widget));
        }
        PresetCommand::Remove { id, widget } => {
            update(&mut store, *id, |preset| preset.remove_widget(*widget).map(|_| ()))?;
            output::print_success(&format!("Removed widget {}", widget));
        }
        PresetCommand::Delete { id } => {
            store.delete(*id)?;
            output::print_success(&format!("Deleted preset {}", id));
        }
    }
    Ok(())
}
