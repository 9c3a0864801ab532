//! Score text and power-up banner overlays.

use super::state::{PowerUpBanner, ScoreText};
use crate::config::GameConfig;
use crate::constants::{POWER_UP_BANNER_Y, SCORE_TEXT_MARGIN};
use crate::scene::{DespawnAfter, GameSceneEntity};
use bevy::prelude::*;

/// Text shown by the score display.
pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

/// Spawn the score text in the top-left corner.
pub fn spawn_score_text(commands: &mut Commands, config: &GameConfig, score: u32) {
    commands.spawn((
        Text::new(score_label(score)),
        TextFont {
            font_size: config.score_font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(SCORE_TEXT_MARGIN),
            top: Val::Px(SCORE_TEXT_MARGIN),
            ..default()
        },
        ScoreText,
        GameSceneEntity,
    ));
}

/// Rewrite every score text with the current score.
pub fn refresh_score_text(texts: &mut Query<&mut Text, With<ScoreText>>, score: u32) {
    for mut text in texts.iter_mut() {
        *text = Text::new(score_label(score));
    }
}

/// Spawn the "Power Up!" banner horizontally centred near the top edge.
///
/// The banner removes itself after `power_up_banner_secs`.
pub fn spawn_power_up_banner(commands: &mut Commands, config: &GameConfig) -> Entity {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                top: Val::Px(POWER_UP_BANNER_Y - config.power_up_font_size / 2.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            PowerUpBanner,
            GameSceneEntity,
            DespawnAfter::secs(config.power_up_banner_secs),
        ))
        .with_children(|banner| {
            banner.spawn((
                Text::new("Power Up!"),
                TextFont {
                    font_size: config.power_up_font_size,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.0, 0.0)),
            ));
        })
        .id()
}
