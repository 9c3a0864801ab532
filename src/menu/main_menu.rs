use super::common::*;
use super::*;
use crate::config::GameConfig;
use crate::constants::START_BUTTON_OFFSET_Y;

/// Spawn the menu background and the start control.
///
/// Layout (playfield coordinates):
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │                                             │
/// │        background centred at (960, 540)     │
/// │                                             │
/// │            [ START ]  at (960, 640)         │
/// │                                             │
/// └─────────────────────────────────────────────┘
/// ```
pub fn setup_main_menu(mut commands: Commands, assets: Res<MenuAssets>, config: Res<GameConfig>) {
    let playfield = config.playfield();

    commands.spawn((
        Sprite {
            image: assets.background.clone(),
            custom_size: Some(Vec2::new(playfield.width, playfield.height)),
            ..default()
        },
        Transform::from_translation(playfield.to_world(playfield.center()).extend(0.0)),
        MenuBackground,
        MenuSceneEntity,
    ));

    // Flex-centred column; the top margin pushes the button
    // START_BUTTON_OFFSET_Y below the centre line.
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            MenuSceneEntity,
        ))
        .with_children(|root| {
            root.spawn((
                Button,
                Node {
                    width: Val::Px(220.0),
                    height: Val::Px(80.0),
                    margin: UiRect::top(Val::Px(START_BUTTON_OFFSET_Y * 2.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                ImageNode::new(assets.start_button.clone()).with_color(start_tint()),
                BorderColor::all(start_border()),
                MenuStartButton,
            ));
        });
}

/// Start the game on a press of the start control or Enter; tint on hover.
#[allow(clippy::type_complexity)]
pub fn menu_button_system(
    mut start_query: Query<
        (&Interaction, &mut ImageNode),
        (Changed<Interaction>, With<MenuStartButton>),
    >,
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Playing);
        return;
    }

    for (interaction, mut image) in start_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                next_state.set(GameState::Playing);
            }
            Interaction::Hovered => image.color = start_hover_tint(),
            Interaction::None => image.color = start_tint(),
        }
    }
}
