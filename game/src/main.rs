
mod assets;

use crate::assets::*;

use std::error::Error as _;
use std::process;
use std::thread;
use std::time::Instant;

use ggez::{ self, GameError, Context, ContextBuilder };
use ggez::conf::{ FullscreenType, WindowMode, WindowSetup };
use ggez::event::{ self, EventHandler };
use ggez::graphics::{ self, BLACK };
use ggez::input::keyboard::{ KeyCode, KeyMods };

use hexmissions::clock::FrameClock;
use hexmissions::config::Config;
use hexmissions::level::{ self, LevelMap };
use hexmissions::lifecycle::{ Phase, Signal };
use hexmissions::tile::STANDARD_TILES;
use hexmissions_ggez::{ RenderError, Renderer };

use env_logger::Env;
use log::{ error, info, trace };
use thiserror::Error;

const TITLE: &str = "Hexmissions";
const CONFIG_FILE: &str = "hexmissions.ron";

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Core(#[from] hexmissions::Error),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("the game loop failed")]
    Backend(#[from] GameError),
}

/// The complete game state.
struct State {
    phase: Phase,
    level: LevelMap,
    renderer: Renderer,
    clock: FrameClock,
}

impl State {
    fn signal(&mut self, ctx: &mut Context, signal: Signal) {
        self.phase = self.phase.on_signal(signal);
        if self.phase == Phase::Terminating {
            event::quit(ctx);
        }
    }
}

impl EventHandler for State {
    fn update(&mut self, _ctx: &mut Context) -> ggez::GameResult<()> {
        self.phase = self.phase.start();
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> ggez::GameResult<()> {
        if !self.phase.is_running() {
            return Ok(())
        }

        graphics::clear(ctx, BLACK);
        self.renderer.draw(ctx, &self.level)?;
        graphics::present(ctx)?;

        let wait = self.clock.tick(Instant::now());
        trace!("Frame done, waiting {:?}", wait);
        thread::sleep(wait);

        Ok(())
    }

    // Escape is handled on release. The default handler would quit
    // on the key press already.
    fn key_down_event(&mut self, _ctx: &mut Context, _code: KeyCode, _mod: KeyMods, _repeat: bool) {}

    fn key_up_event(&mut self, ctx: &mut Context, code: KeyCode, _mod: KeyMods) {
        if code == KeyCode::Escape {
            self.signal(ctx, Signal::Escape);
        }
    }

    fn quit_event(&mut self, ctx: &mut Context) -> bool {
        self.signal(ctx, Signal::CloseRequested);
        false
    }
}

fn run() -> Result<(), Error> {
    let config = Config::load(CONFIG_FILE)?;
    let level = level::fixed(&STANDARD_TILES, config.hex_radius)?;

    // Setup the Context
    let (width, height) = config.viewport;
    let fullscreen = if config.fullscreen {
        FullscreenType::Desktop
    } else {
        FullscreenType::Windowed
    };
    let (ctx, game_loop) = &mut ContextBuilder
        ::new("hexmissions", "roman")
         .window_setup(WindowSetup::default().title(TITLE).vsync(true))
         .window_mode(WindowMode::default()
             .dimensions(width as f32, height as f32)
             .fullscreen_type(fullscreen))
         .add_resource_path(config.resources.clone())
         .build()?;

    // Load assets
    let Assets { images, font } = Assets::load(ctx, &config.assets)?;

    // Setup rendering
    let renderer = Renderer::new(ctx, &level, &config, images.background, &images.ground_tile, font)?;

    // Run the game
    let state = &mut State {
        phase: Phase::default(),
        level,
        renderer,
        clock: FrameClock::new(config.max_fps),
    };
    event::run(ctx, game_loop, state)?;
    info!("Window closed");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        let mut source = e.source();
        while let Some(s) = source {
            error!("  caused by: {}", s);
            source = s.source();
        }
        process::exit(1);
    }
}
