//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:41 Sunday
//! brief:

mod cell;
mod config;
mod error;
mod grid;
mod session;
mod sprite;
mod status;

pub use cell::*;
pub use config::*;
pub use error::*;
pub use grid::*;
pub use session::*;
pub use sprite::*;
pub use status::*;

use gpui::{
    AnyElement, App, Context, FocusHandle, Focusable, MouseButton, MouseUpEvent, Render, Timer,
    Window, actions, div, img, prelude::*, px, rgb, rgba,
};

use crate::assets::Assets;

actions!(mines, [RestartGame, QuitGame]);

pub struct MinesGame {
    session: Session,
    assets: Assets,
    focus_handle: FocusHandle,
}

impl MinesGame {
    pub fn new(session: Session, assets: Assets, cx: &mut Context<Self>) -> Self {
        let game = Self {
            session,
            assets,
            focus_handle: cx.focus_handle(),
        };
        if game.session.status() == GameStatus::PreGame {
            game.schedule_preview_end(cx);
        }
        game
    }

    fn schedule_preview_end(&self, cx: &mut Context<Self>) {
        let delay = self.session.config().preview;
        cx.spawn(async move |this, cx| {
            Timer::after(delay).await;
            if this
                .update(cx, |game, cx| game.apply(GameEvent::PreviewElapsed, cx))
                .is_err()
            {
                log::debug!("view released before the preview ended");
            }
        })
        .detach();
    }

    fn apply(&mut self, event: GameEvent, cx: &mut Context<Self>) {
        match self.session.dispatch(event) {
            Ok(true) => {
                if self.session.status() == GameStatus::PreGame {
                    self.schedule_preview_end(cx);
                }
                cx.notify();
            }
            Ok(false) => {}
            Err(err) => {
                log::error!("Could not start a new round: {err}");
                cx.quit();
            }
        }
    }

    fn handle_release(&mut self, event: &MouseUpEvent, cx: &mut Context<Self>) {
        let position = event.position;
        self.apply(
            GameEvent::Release {
                x: f32::from(position.x),
                y: f32::from(position.y),
            },
            cx,
        );
    }

    fn handle_restart(&mut self, cx: &mut Context<Self>) {
        self.apply(GameEvent::Restart, cx);
    }

    fn tile(&self, sprite: Option<Sprite>) -> AnyElement {
        let cell_size = px(self.session.config().cell_size as f32);
        match sprite {
            Some(sprite) => img(self.assets.image(sprite))
                .w(cell_size)
                .h(cell_size)
                .into_any_element(),
            None => div().w(cell_size).h(cell_size).into_any_element(),
        }
    }

    fn layer(&self, pick: fn(GameStatus, Cell) -> Option<Sprite>) -> impl IntoElement {
        let grid = self.session.grid();
        let status = self.session.status();

        div()
            .flex()
            .flex_col()
            .children((0..grid.height()).map(|y| {
                div().flex().children((0..grid.width()).map(|x| {
                    let sprite = grid.get(x, y).and_then(|cell| pick(status, cell));
                    self.tile(sprite)
                }))
            }))
    }
}

impl Render for MinesGame {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let status = self.session.status();
        let text_size = px(self.session.config().text_size);

        div()
            .bg(rgb(0x000000))
            .size_full()
            .relative()
            .track_focus(&self.focus_handle(cx))
            .key_context("gpui-mines")
            .on_action(cx.listener(|this, _: &RestartGame, _, cx| this.handle_restart(cx)))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, event: &MouseUpEvent, _, cx| this.handle_release(event, cx)),
            )
            .child(self.layer(board_sprite))
            .when_some(status.message(), |this, message| {
                this.child(
                    div()
                        .absolute()
                        .top(px(0.))
                        .bottom(px(0.))
                        .left(px(0.))
                        .right(px(0.))
                        .bg(rgba(0x00000080)),
                )
                .child(div().absolute().top(px(0.)).left(px(0.)).child(self.layer(overlay_sprite)))
                .child(
                    div()
                        .absolute()
                        .top(px(0.))
                        .bottom(px(0.))
                        .left(px(0.))
                        .right(px(0.))
                        .flex()
                        .items_center()
                        .justify_center()
                        .font_family(self.assets.font_family.clone())
                        .text_size(text_size)
                        .text_color(rgb(0xffffff))
                        .child(message),
                )
            })
    }
}

impl Focusable for MinesGame {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
