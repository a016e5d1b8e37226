//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:00 Sunday
//! brief:

use std::{cell::RefCell, rc::Rc};

use anyhow::{Context as _, Result};
use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};

use crate::{
    assets::{Assets, asset_dir},
    game::{GameConfig, MinesGame, QuitGame, RestartGame, Session},
};

pub fn run() -> Result<()> {
    let config = GameConfig::default();
    let assets = Assets::load(asset_dir())?;
    let session = Session::new(config)?;

    // The application closure cannot return errors; stash the first one here.
    let failure: Rc<RefCell<Option<anyhow::Error>>> = Rc::default();
    let slot = failure.clone();

    Application::new().run(move |cx: &mut App| {
        if let Err(err) = open_game_window(config, session, assets, cx) {
            slot.replace(Some(err));
            cx.quit();
        }
    });

    failure.take().map_or(Ok(()), Err)
}

fn open_game_window(
    config: GameConfig,
    session: Session,
    assets: Assets,
    cx: &mut App,
) -> Result<()> {
    assets.register_font(cx)?;

    cx.bind_keys([
        KeyBinding::new("enter", RestartGame, None),
        KeyBinding::new("r", RestartGame, None),
        KeyBinding::new("escape", QuitGame, None),
    ]);

    let bounds = Bounds::centered(
        None,
        size(px(config.window_width()), px(config.window_height())),
        cx,
    );
    let window = cx
        .open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Minefield".into()),
                    ..Default::default()
                }),
                is_resizable: false,
                ..Default::default()
            },
            |_, cx| cx.new(|cx| MinesGame::new(session, assets, cx)),
        )
        .context("could not open the game window")?;

    window
        .update(cx, |view: &mut MinesGame, window, cx| {
            window.focus(&view.focus_handle(cx));
        })
        .context("could not focus the game window")?;

    cx.on_action(|_: &QuitGame, cx| cx.quit());
    cx.activate(true);
    Ok(())
}
