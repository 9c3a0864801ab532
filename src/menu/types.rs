use bevy::prelude::*;

/// Top-level application state machine.
///
/// Every game-scene frame system runs under
/// `.run_if(in_state(GameState::Playing))`, so the world is inert while the
/// menu or the game-over prompt is displayed.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Splash screen; shown on startup.
    #[default]
    MainMenu,
    /// Active gameplay.
    Playing,
    /// Ship destroyed; world frozen behind the restart prompt.
    GameOver,
}

/// Menu background sprite.
#[derive(Component)]
pub struct MenuBackground;

/// Tags the start control.
#[derive(Component)]
pub struct MenuStartButton;

/// Root node of the game-over overlay.
#[derive(Component)]
pub struct GameOverRoot;

/// Tags the clickable "Game Over! Click to play again." prompt.
#[derive(Component)]
pub struct GameOverPrompt;
