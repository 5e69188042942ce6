/*
 * UI Module
 *
 * This module contains the egui control panel for the viewer. The three
 * coefficient sliders write straight through the simulation handle, so a
 * change takes effect on the next tick.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::handle::SimulationHandle;
use crate::params::{Coefficient, SimulationConfig};

// Values edited by the control panel
pub struct ControlState {
    pub coefficients: [f32; 3],
    pub show_debug: bool,
    pub pause_simulation: bool,
}

impl ControlState {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            coefficients: Coefficient::ALL.map(|kind| config.coefficient(kind)),
            show_debug: false,
            pause_simulation: false,
        }
    }
}

// Draw the control panel and forward coefficient changes.
// Returns true when the pause checkbox was toggled.
pub fn update_ui(
    egui: &mut Egui,
    controls: &mut ControlState,
    handle: &SimulationHandle,
    debug_info: &DebugInfo,
) -> bool {
    let before = controls.coefficients;
    let was_paused = controls.pause_simulation;

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flocking Behavior", |ui| {
                for (kind, value) in Coefficient::ALL.iter().zip(controls.coefficients.iter_mut()) {
                    ui.add(
                        egui::Slider::new(value, SimulationConfig::coefficient_range())
                            .step_by(SimulationConfig::coefficient_step())
                            .text(kind.label()),
                    );
                }
            });

            ui.collapsing("Statistics", |ui| {
                for line in debug_info.lines() {
                    ui.label(line);
                }
            });

            ui.checkbox(&mut controls.show_debug, "Show Debug Info");
            ui.checkbox(&mut controls.pause_simulation, "Pause Simulation");
        });

    for (i, kind) in Coefficient::ALL.iter().enumerate() {
        if controls.coefficients[i] != before[i] {
            handle.set_coefficient(*kind, controls.coefficients[i]);
        }
    }

    controls.pause_simulation != was_paused
}
