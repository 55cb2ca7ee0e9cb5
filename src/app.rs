use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::clock::FrameClock;
use crate::config::{FPS, GameConfig};
use crate::input::InputManager;
use crate::renderer::{GameRenderer, RenderView};
use crate::session::{FrameInput, GameSession};

/// The main application which holds the session and its terminal adapters.
pub struct App {
    running: bool,
    /// Pausing freezes the session without touching its state machine
    paused: bool,
    session: GameSession,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    clock: FrameClock,
}

impl App {
    /// Construct a new instance of [`App`].
    ///
    /// `release_events` tells the input layer whether the terminal reports key
    /// releases; `seed` pins enemy fire for reproducible runs.
    pub fn new(config: GameConfig, release_events: bool, seed: Option<u64>) -> Self {
        let session = match seed {
            Some(seed) => {
                log::info!("using fixed seed {seed}");
                GameSession::with_seed(config, seed)
            }
            None => GameSession::new(config),
        };

        Self {
            running: true,
            paused: false,
            session,
            input_manager: InputManager::new(release_events),
            renderer: GameRenderer::new(),
            clock: FrameClock::new(FPS),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            // Poll input events and resolve this frame's signals
            self.input_manager.poll_events()?;
            let input = self.input_manager.frame_input();
            self.process_input(&input);

            // Render after the update so the frame shows post-update state
            terminal.draw(|frame| {
                let view = RenderView {
                    snapshot: self.session.snapshot(),
                    area: frame.area(),
                    fps: self.clock.fps(),
                    paused: self.paused,
                };
                self.renderer.render(frame, &view);
            })?;

            self.clock.tick();
        }
        log::info!("quitting with score {}", self.session.score());
        Ok(())
    }

    /// Apply one frame of input to the app and the session
    fn process_input(&mut self, input: &FrameInput) {
        if input.quit {
            self.running = false;
            return;
        }

        if input.pause && !self.session.state().is_terminal() {
            self.paused = !self.paused;
            log::debug!("paused: {}", self.paused);
        }

        if input.reset {
            self.paused = false;
        }

        if self.paused {
            return;
        }

        self.session.step(input);
    }
}
