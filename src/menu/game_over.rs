use super::common::*;
use super::*;
use crate::config::GameConfig;

/// Spawn the restart prompt centred over the frozen world.
///
/// The overlay carries [`GameSceneEntity`], so it goes away together with the
/// rest of the old game scene when `GameOver` is left.
pub fn setup_game_over(mut commands: Commands, config: Res<GameConfig>) {
    let font = TextFont {
        font_size: config.game_over_font_size,
        ..default()
    };

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            ZIndex(300),
            GameOverRoot,
            GameSceneEntity,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Button,
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    GameOverPrompt,
                ))
                .with_children(|prompt| {
                    prompt.spawn((
                        Text::new("Game Over!"),
                        font.clone(),
                        TextColor(game_over_text()),
                    ));
                    prompt.spawn((
                        Text::new("Click to play again."),
                        font,
                        TextColor(game_over_text()),
                    ));
                });
        });
}

/// Restart the game scene on a click on the prompt or Enter.
///
/// `OnExit(GameOver)` tears the old scene down and `OnEnter(Playing)` builds a
/// fresh one with the session reset.
#[allow(clippy::type_complexity)]
pub fn game_over_button_system(
    prompt_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<GameOverPrompt>)>,
    mut prompt_text: Query<&mut TextColor>,
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let wants_restart = keys.just_pressed(KeyCode::Enter)
        || prompt_query
            .iter()
            .any(|(i, _)| *i == Interaction::Pressed);

    if wants_restart {
        info!("Restarting game scene");
        next_state.set(GameState::Playing);
        return;
    }

    for (interaction, children) in prompt_query.iter() {
        let color = match interaction {
            Interaction::Hovered => game_over_hover_text(),
            _ => game_over_text(),
        };
        for child in children.iter() {
            if let Ok(mut text_color) = prompt_text.get_mut(child) {
                *text_color = TextColor(color);
            }
        }
    }
}
