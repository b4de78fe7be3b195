use {
    bevy::{log::LogPlugin, prelude::*},
    requirements::{DefinitionKind, RequirementsPlugin, Tracker},
    std::process::ExitCode,
    tracker_events::ApplyModePreset,
    tracker_resources::{ModeConfiguration, TrackerError},
};

const DEFAULT_PRESET: &str = include_str!("../assets/modes/open.mode.ron");

/// Loads the preset named on the command line, or the bundled open preset.
fn load_preset() -> Result<ModeConfiguration, TrackerError> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading mode preset");
            let source = std::fs::read_to_string(&path)
                .map_err(|e| TrackerError::InvalidPreset(format!("{path}: {e}")))?;
            ModeConfiguration::from_ron(&source)
        }
        None => ModeConfiguration::from_ron(DEFAULT_PRESET),
    }
}

fn main() -> ExitCode {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        LogPlugin {
            filter: "warn,requirements=info,tracker_resources=info,hyrule_tracker=info".into(),
            level: bevy::log::Level::TRACE,
            ..Default::default()
        },
    ))
    .add_plugins(RequirementsPlugin);

    // Startup builds the registry
    app.update();

    let preset = match load_preset() {
        Ok(preset) => preset,
        Err(e) => {
            error!(error = %e, "failed to load mode preset");
            return ExitCode::FAILURE;
        }
    };
    app.world_mut().trigger(ApplyModePreset(preset));
    app.update();

    let mut tracker = app.world_mut().resource_mut::<Tracker>();
    let nodes: Vec<_> = tracker
        .identifiers()
        .filter(|id| tracker.kind(id) == Ok(DefinitionKind::Node))
        .collect();

    for id in nodes {
        match tracker.accessibility(id) {
            Ok(tier) => info!(node = id, %tier, "node accessibility"),
            Err(e) => {
                error!(node = id, error = %e, "failed to evaluate node");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
