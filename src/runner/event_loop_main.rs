use anyhow::Context;

use crate::app::settings::Settings;
use crate::app::{Hub, HubEvent, NavigationState, WaitKind};
use crate::fs_op::{PathResolver, Resolver};
use crate::input::LineInput;
use crate::runner::interrupt;
use crate::runner::launcher::{Launcher, ProcessLauncher};
use crate::runner::terminal::{install_panic_hook, Console, CrosstermConsole};

/// Drive the hub until it reaches `Exiting`.
///
/// One screen at a time: render, clear, print, then block on whatever the
/// screen waits for. Returns after the farewell screen has been printed.
pub fn run_hub<R, C, L>(hub: &Hub<R>, console: &mut C, launcher: &mut L) -> anyhow::Result<()>
where
    R: Resolver,
    C: Console,
    L: Launcher,
{
    let mut state = NavigationState::MainMenu;
    loop {
        let (cols, _) = console.size();
        let view = hub.render(&state, cols as usize);
        console.clear().context("clearing the screen")?;
        console.write_screen(&view.text).context("drawing the screen")?;

        let event = match &view.wait {
            WaitKind::Line { prompt } => match console.read_line(prompt).context("reading input")? {
                LineInput::Line(line) => HubEvent::Line(line),
                LineInput::Interrupted => HubEvent::Interrupted,
            },
            WaitKind::AnyKey => {
                console.wait_for_key().context("waiting for a key")?;
                HubEvent::KeyPressed
            }
            WaitKind::Launch(game) => HubEvent::Launched(launcher.launch(game)),
            WaitKind::Exit => {
                tracing::info!("exiting");
                return Ok(());
            }
        };

        let next = hub.step(state, &view, event);
        tracing::debug!(state = ?next, "transition");
        state = next;
    }
}

/// Run the interactive hub on the real terminal with `settings`.
pub fn run_app(settings: &Settings) -> anyhow::Result<()> {
    let catalog = settings.catalog().context("building the game catalog")?;
    interrupt::install_handler().context("installing the Ctrl+C handler")?;
    install_panic_hook();

    let resolver = PathResolver::from_env();
    let hub = Hub::new(catalog, resolver.clone());
    let mut launcher = ProcessLauncher::new(resolver);
    let mut console = CrosstermConsole::new(settings.fallback_size(), settings.key_poll());

    tracing::info!(categories = hub.catalog().categories().len(), "starting hub");
    run_hub(&hub, &mut console, &mut launcher)
}
