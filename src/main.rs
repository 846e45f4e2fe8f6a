use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use term_scatter::camera::Camera;
use term_scatter::cli::Cli;
use term_scatter::config::{TrackedTerm, VisualizerConfig};
use term_scatter::core::Clock;
use term_scatter::layout::{drift_markers, MARKERS_PER_OCCURRENCE};
use term_scatter::loaders::load_source_text;
use term_scatter::renderer::MarkerRenderer;
use term_scatter::scenes::create_term_scene;
use term_scatter::text::{find_occurrences, tokenize};
use term_scatter::types::MarkerData;
use term_scatter::view::ViewToggles;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<MarkerRenderer>,
    camera: Camera,
    markers: Vec<MarkerData>,
    toggles: ViewToggles,
    terms: Vec<TrackedTerm>,
    load_error: Option<String>,
    clock: Clock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(terms: Vec<TrackedTerm>, markers: Vec<MarkerData>, load_error: Option<String>) -> Self {
        Self {
            window: None,
            renderer: None,
            camera: Camera::new(),
            markers,
            toggles: ViewToggles::default(),
            terms,
            load_error,
            clock: Clock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Term Scatter")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer =
                match pollster::block_on(MarkerRenderer::new(window.clone(), &self.markers)) {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("Failed to initialize renderer: {:#}", e);
                        event_loop.exit();
                        return;
                    }
                };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return; // egui consumed the event
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.camera.process_keyboard(&event),
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                self.update_fps(delta);

                if self.toggles.animate_markers {
                    drift_markers(&mut self.markers, delta);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.update_markers(&self.markers);
                    }
                }

                if self.toggles.rotate_camera {
                    self.camera.orbit(self.clock.elapsed());
                } else {
                    self.camera.update();
                }

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    if let Err(e) = renderer.render(
                        &self.camera,
                        window,
                        self.fps,
                        &mut self.toggles,
                        &self.terms,
                        self.load_error.as_deref(),
                    ) {
                        eprintln!("Render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Headless mode: run the analysis pipeline and print per-term counts.
fn run_analysis(config: &VisualizerConfig) -> Result<()> {
    let text = load_source_text(&config.source)?;
    let tokens = tokenize(&text);
    if tokens.is_empty() {
        println!("Source text produced no tokens");
        return Ok(());
    }

    println!("{} tokens from {}", tokens.len(), config.source);
    for term in &config.terms {
        let occurrences = find_occurrences(&tokens, &term.word);
        println!(
            "  \"{}\": {} occurrences -> {} markers",
            term.word,
            occurrences.len(),
            occurrences.len() * MARKERS_PER_OCCURRENCE
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => VisualizerConfig::from_file(path)?,
        None => VisualizerConfig::default(),
    };
    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if let Some(words) = &cli.terms {
        config = config.with_words(words)?;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;

    if cli.no_ui {
        return run_analysis(&config);
    }

    // Load stage, then the pure pipeline. A load failure still opens the
    // window: the scene stays empty and the overlay reports the error.
    let (markers, load_error) = match load_source_text(&config.source) {
        Ok(text) => {
            let mut rng = seeded_rng(config.seed);
            (create_term_scene(&text, &config.terms, &mut rng), None)
        }
        Err(e) => {
            log::error!("Source text load failed: {:#}", e);
            (Vec::new(), Some(format!("Failed to load source text: {:#}", e)))
        }
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config.terms, markers, load_error);

    println!("Term Scatter - Controls: WASD, Space/Shift, Q/E, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
