//! Menu scene, game-over overlay and the top-level `GameState` machine.
//!
//! ## States
//!
//! | State       | Description                                          |
//! |-------------|------------------------------------------------------|
//! | `MainMenu`  | Initial state; splash background and start control   |
//! | `Playing`   | Game scene running; all frame systems active         |
//! | `GameOver`  | World frozen; "click to play again" prompt shown      |
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                     | Schedule                  | Purpose                          |
//! |----------------------------|---------------------------|----------------------------------|
//! | `load_menu_assets`         | `OnEnter(MainMenu)`       | Queue menu images (first visit)  |
//! | `setup_main_menu`          | `OnEnter(MainMenu)`       | Spawn background + start control |
//! | `despawn_scene::<Menu…>`   | `OnExit(MainMenu)`        | Despawn menu entities            |
//! | `menu_button_system`       | `Update / in MainMenu`    | Start on click or Enter          |
//! | `setup_game_over`          | `OnEnter(GameOver)`       | Spawn the restart prompt         |
//! | `game_over_button_system`  | `Update / in GameOver`    | Restart on click or Enter        |
//! | `despawn_scene::<Game…>`   | `OnExit(GameOver)`        | Tear the old game scene down     |
//! | `pointer_cursor_system`    | `Update`                  | Hand cursor over clickable UI    |

mod common;
mod game_over;
mod main_menu;
mod types;

pub use game_over::{game_over_button_system, setup_game_over};
pub use main_menu::{menu_button_system, setup_main_menu};
pub use types::*;

use crate::config::GameConfig;
use crate::graphics::{load_menu_assets, MenuAssets};
use crate::scene::{despawn_scene, GameSceneEntity, MenuSceneEntity};
use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};

/// Registers `GameState`, the menu scene and the game-over overlay.
///
/// Must be added **before** any plugin that calls
/// `.run_if(in_state(GameState::…))`, so the state is always registered first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameConfig>()
            .add_systems(
                OnEnter(GameState::MainMenu),
                (
                    log_menu_entry,
                    load_menu_assets.run_if(not(resource_exists::<MenuAssets>)),
                    setup_main_menu,
                )
                    .chain(),
            )
            .add_systems(OnExit(GameState::MainMenu), despawn_scene::<MenuSceneEntity>)
            .add_systems(
                Update,
                menu_button_system.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(
                Update,
                game_over_button_system.run_if(in_state(GameState::GameOver)),
            )
            .add_systems(OnExit(GameState::GameOver), despawn_scene::<GameSceneEntity>)
            .add_systems(Update, pointer_cursor_system);
    }
}

fn log_menu_entry() {
    info!("Menu Scene");
}

/// Show a pointer cursor while any button is hovered or pressed.
///
/// Clicking a control despawns it with its scene, which drops the cursor back
/// to the default on the next frame.
pub fn pointer_cursor_system(
    mut commands: Commands,
    buttons: Query<&Interaction, With<Button>>,
    window: Query<Entity, With<PrimaryWindow>>,
    mut pointing: Local<bool>,
) {
    let over_control = buttons.iter().any(|i| *i != Interaction::None);
    if over_control == *pointing {
        return;
    }
    let Ok(window) = window.single() else {
        return;
    };
    *pointing = over_control;
    let icon = if over_control {
        SystemCursorIcon::Pointer
    } else {
        SystemCursorIcon::Default
    };
    commands.entity(window).insert(CursorIcon::from(icon));
}
