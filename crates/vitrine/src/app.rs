//! Application state and the host render loop.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{DefaultTerminal, Frame, layout::Rect};
use vitrine_config::Config;
use vitrine_content::{CODE_SNIPPETS, section};
use vitrine_core::SectionId;
use vitrine_scene::{OrbitCamera, Scene, SceneBuilder, render_scene};

use crate::assets::Assets;
use crate::clock::FrameClock;
use crate::overlay;

/// Rotate sensitivity per dragged cell, in radians.
const DRAG_YAW_RATE: f32 = 0.02;
const DRAG_PITCH_RATE: f32 = 0.05;

/// Zoom step per wheel notch, in world units.
const WHEEL_ZOOM_STEP: f32 = 1.0;

/// What a pointer drag is currently doing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DragMode {
    Rotate,
    Pan,
}

/// An in-progress pointer drag.
#[derive(Debug, Copy, Clone)]
struct Drag {
    column: u16,
    row: u16,
    mode: DragMode,
}

/// The scene and its resolved assets, present only after loading.
#[derive(Debug)]
struct Ready {
    scene: Scene,
    assets: Assets,
}

/// Deferred-rendering stage: the scene group does not exist until the
/// assets it depends on have resolved.
#[derive(Debug)]
enum Stage {
    /// Placeholder visible; `frames_drawn` counts placeholder frames.
    Loading { frames_drawn: u32 },
    /// Assets resolved; the scene renders and animates.
    Ready(Ready),
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded configuration.
    config: Config,
    /// Elapsed-time source owned by the host loop.
    clock: FrameClock,
    /// The orbiting camera.
    camera: OrbitCamera,
    /// Loading placeholder or the live scene.
    stage: Stage,
    /// Currently opened overlay section, if any.
    active: Option<SectionId>,
    /// Whether the help line is visible.
    show_help: bool,
    /// In-progress pointer drag.
    drag: Option<Drag>,
    /// Elapsed time of the previous tick, for camera auto-rotation.
    last_t: f32,
}

impl App {
    /// Construct a new instance of [`App`] in the loading stage.
    pub fn new(config: Config) -> Self {
        let mut camera = OrbitCamera::new();
        camera.set_auto_rotate(config.auto_rotate);
        Self {
            running: false,
            config,
            clock: FrameClock::new(),
            camera,
            stage: Stage::Loading { frames_drawn: 0 },
            active: None,
            show_help: true,
            drag: None,
            last_t: 0.0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.resolve_assets()?;
            self.handle_crossterm_events()?;
            let t = self.clock.elapsed();
            self.tick(t);
        }
        Ok(())
    }

    /// Swap from the loading placeholder to the live scene once the
    /// placeholder has been shown and the assets resolve.
    fn resolve_assets(&mut self) -> color_eyre::Result<()> {
        if let Stage::Loading { frames_drawn } = self.stage
            && frames_drawn > 0
        {
            let assets = Assets::load(&self.config)?;
            let scene = SceneBuilder::new()
                .preset(self.config.preset)
                .particles(self.config.particle_seed)
                .showcase_meshes()
                .label_ring(CODE_SNIPPETS)
                .build();
            self.stage = Stage::Ready(Ready { scene, assets });
        }
        Ok(())
    }

    /// Advance one frame of animation for elapsed time `t`.
    ///
    /// Once the application has quit, ticks write nothing.
    fn tick(&mut self, t: f32) {
        if !self.running {
            return;
        }
        let dt = (t - self.last_t).max(0.0);
        self.last_t = t;
        self.camera.advance(dt);
        if let Stage::Ready(ready) = &mut self.stage {
            ready.scene.update(t);
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let t = self.clock.elapsed();
        let area = frame.area();

        match &mut self.stage {
            Stage::Loading { frames_drawn } => {
                *frames_drawn += 1;
                let palette = self.config.preset.palette();
                overlay::loading_screen(frame, area, t, &palette);
            }
            Stage::Ready(ready) => {
                let palette = ready.scene.preset.palette();
                let (nav, canvas, help) = split_page(area, self.show_help);

                render_scene(frame.buffer_mut(), canvas, &mut ready.scene, &self.camera, t);
                if let Some(id) = self.active {
                    overlay::section_panel(
                        frame,
                        canvas,
                        &self.camera,
                        &section(id),
                        &ready.assets,
                        &palette,
                    );
                }
                overlay::nav_bar(frame, nav, self.active, &palette);
                if let Some(help) = help {
                    overlay::help_line(frame, help, &palette);
                }
            }
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so animation advances between inputs.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab) => self.cycle_section(),
            (_, KeyCode::Char('1')) => self.active = Some(SectionId::Hero),
            (_, KeyCode::Char('2')) => self.active = Some(SectionId::Services),
            (_, KeyCode::Char('3')) => self.active = Some(SectionId::About),
            (_, KeyCode::Char('4')) => self.active = Some(SectionId::Contact),
            (_, KeyCode::Char('0')) => self.active = None,
            (_, KeyCode::Char('r')) => {
                let on = self.camera.auto_rotate();
                self.camera.set_auto_rotate(!on);
            }
            (_, KeyCode::Char('c')) => self.cycle_preset(),
            (_, KeyCode::Char('h')) => self.show_help = !self.show_help,
            _ => {}
        }
    }

    /// Handles pointer input: drag to orbit, modified drag to pan,
    /// wheel to zoom within the clamped distance range.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let mode = if mouse.modifiers.contains(KeyModifiers::SHIFT) {
                    DragMode::Pan
                } else {
                    DragMode::Rotate
                };
                self.drag = Some(Drag {
                    column: mouse.column,
                    row: mouse.row,
                    mode,
                });
            }
            MouseEventKind::Down(MouseButton::Right) => {
                self.drag = Some(Drag {
                    column: mouse.column,
                    row: mouse.row,
                    mode: DragMode::Pan,
                });
            }
            MouseEventKind::Drag(_) => {
                if let Some(drag) = self.drag {
                    let dx = mouse.column as f32 - drag.column as f32;
                    let dy = mouse.row as f32 - drag.row as f32;
                    match drag.mode {
                        DragMode::Rotate => {
                            self.camera.rotate(-dx * DRAG_YAW_RATE, -dy * DRAG_PITCH_RATE);
                        }
                        DragMode::Pan => self.camera.pan(dx, dy),
                    }
                    self.drag = Some(Drag {
                        column: mouse.column,
                        row: mouse.row,
                        mode: drag.mode,
                    });
                }
            }
            MouseEventKind::Up(_) => self.drag = None,
            MouseEventKind::ScrollUp => self.camera.zoom(-WHEEL_ZOOM_STEP),
            MouseEventKind::ScrollDown => self.camera.zoom(WHEEL_ZOOM_STEP),
            _ => {}
        }
    }

    /// Cycle the overlay through all sections and back to none.
    fn cycle_section(&mut self) {
        self.active = match self.active {
            None => Some(SectionId::Hero),
            Some(SectionId::Contact) => None,
            Some(id) => Some(id.next()),
        };
    }

    /// Cycle the environment preset of the live scene.
    fn cycle_preset(&mut self) {
        if let Stage::Ready(ready) = &mut self.stage {
            ready.scene.preset = ready.scene.preset.next();
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Split the page into navigation bar, canvas and optional help line.
fn split_page(area: Rect, show_help: bool) -> (Rect, Rect, Option<Rect>) {
    use ratatui::layout::{Constraint, Layout};
    if show_help {
        let [nav, canvas, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        (nav, canvas, Some(help))
    } else {
        let [nav, canvas] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        (nav, canvas, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use vitrine_scene::{MeshKind, SceneNode};

    fn ready_app() -> App {
        let mut app = App::new(Config::default());
        app.running = true;
        app.stage = Stage::Loading { frames_drawn: 1 };
        app.resolve_assets().unwrap();
        app
    }

    fn box_rotation_x(app: &App) -> f32 {
        let Stage::Ready(ready) = &app.stage else {
            panic!("app must be ready");
        };
        let mut found = None;
        ready.scene.visit(&mut |node| {
            if let SceneNode::Mesh(mesh) = node
                && mesh.kind() == MeshKind::Box
            {
                found = Some(mesh.rotation().x);
            }
        });
        found.expect("scene must contain the box mesh")
    }

    #[test]
    fn starts_in_the_loading_stage() {
        let mut app = App::new(Config::default());
        // No frame drawn yet: the scene must not materialize.
        app.resolve_assets().unwrap();
        assert!(matches!(app.stage, Stage::Loading { frames_drawn: 0 }));
    }

    #[test]
    fn resolves_after_the_placeholder_frame() {
        let app = ready_app();
        assert!(matches!(app.stage, Stage::Ready(_)));
    }

    #[test]
    fn ticks_animate_the_scene() {
        let mut app = ready_app();
        app.tick(2.0);
        assert_eq!(box_rotation_x(&app), 1.0);
    }

    #[test]
    fn no_writes_after_quit() {
        let mut app = ready_app();
        app.tick(1.0);
        let frozen = box_rotation_x(&app);
        app.quit();
        app.tick(5.0);
        app.tick(9.0);
        assert_eq!(box_rotation_x(&app), frozen);
    }

    #[test]
    fn tab_cycles_sections_and_closes() {
        let mut app = ready_app();
        assert_eq!(app.active, None);
        app.cycle_section();
        assert_eq!(app.active, Some(SectionId::Hero));
        for _ in 0..3 {
            app.cycle_section();
        }
        assert_eq!(app.active, Some(SectionId::Contact));
        app.cycle_section();
        assert_eq!(app.active, None);
    }

    #[test]
    fn wheel_zoom_respects_distance_bounds() {
        let mut app = ready_app();
        for _ in 0..100 {
            app.on_mouse_event(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            });
        }
        assert_eq!(app.camera.distance(), vitrine_scene::MAX_DISTANCE);
        for _ in 0..200 {
            app.on_mouse_event(MouseEvent {
                kind: MouseEventKind::ScrollUp,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            });
        }
        assert_eq!(app.camera.distance(), vitrine_scene::MIN_DISTANCE);
    }

    #[test]
    fn renders_loading_then_scene() {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new(Config::default());
        app.running = true;

        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(matches!(app.stage, Stage::Loading { frames_drawn: 1 }));

        app.resolve_assets().unwrap();
        app.tick(1.0);
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(matches!(app.stage, Stage::Ready(_)));
    }

    #[test]
    fn page_split_reserves_nav_and_help_lines() {
        let (nav, canvas, help) = split_page(Rect::new(0, 0, 80, 24), true);
        assert_eq!(nav.height, 1);
        assert_eq!(canvas.height, 22);
        assert_eq!(help.unwrap().height, 1);
        let (_, canvas, help) = split_page(Rect::new(0, 0, 80, 24), false);
        assert_eq!(canvas.height, 23);
        assert!(help.is_none());
    }
}
