/*
 * Boid Flocking Viewer
 *
 * Interactive host for the flocking core. The simulation ticks on its own
 * scheduler thread every 20 ms; each tick publishes the flock into a shared
 * frame that the view draws. Sliders adjust the three steering forces.
 *
 * Build with `--features gui`.
 */

use std::sync::{Arc, Mutex};
use std::time::Duration;

use flocking::renderer;
use flocking::ui::{self, ControlState};
use flocking::{Boid, SimulationConfig, SimulationHandle};
use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{error, info};

struct Model {
    handle: SimulationHandle,
    config: SimulationConfig,
    frame: Arc<Mutex<Vec<Boid>>>,
    controls: ControlState,
    egui: Egui,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    nannou::app(model).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    let config = SimulationConfig::default();

    let window_id = app
        .new_window()
        .title("Boids")
        .size(config.bounds.width as u32, config.bounds.height as u32)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build window");
    let window = app.window(window_id).expect("Window vanished after creation");
    let egui = Egui::from_window(&window);

    let seed = rand::random::<u64>();
    let mut handle =
        SimulationHandle::create(config.clone(), SimulationConfig::DEFAULT_POPULATION, seed);

    // Publish each tick into the frame the view reads
    let frame = Arc::new(Mutex::new(handle.snapshot()));
    let sink = Arc::clone(&frame);
    handle.on_tick(move |boids| {
        if let Ok(mut frame) = sink.lock() {
            frame.clear();
            frame.extend_from_slice(boids);
        }
    });

    if let Err(err) = handle.start(tick_interval()) {
        error!(%err, "could not start simulation loop");
    }

    Model {
        handle,
        controls: ControlState::from_config(&config),
        config,
        frame,
        egui,
    }
}

fn tick_interval() -> Duration {
    Duration::from_millis(SimulationConfig::DEFAULT_TICK_INTERVAL_MS)
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    let debug_info = model.handle.debug_info();
    let pause_toggled = ui::update_ui(&mut model.egui, &mut model.controls, &model.handle, &debug_info);

    if pause_toggled {
        if model.controls.pause_simulation {
            model.handle.stop();
        } else if let Err(err) = model.handle.start(tick_interval()) {
            error!(%err, "could not resume simulation loop");
        }
    }

    model.config = model.handle.config();
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let boids = match model.frame.lock() {
        Ok(boids) => boids.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };

    renderer::draw_flock(&draw, &boids, &model.config);

    if model.controls.show_debug {
        renderer::draw_debug_overlay(&draw, &boids, &model.config);
        renderer::draw_debug_info(&draw, &model.handle.debug_info(), app.window_rect());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        error!(?err, "failed to draw frame");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!(?err, "failed to draw controls");
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

fn exit(_app: &App, mut model: Model) {
    model.handle.stop();
    info!(ticks = model.handle.debug_info().ticks, "viewer closed");
}
