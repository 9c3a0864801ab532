//! Headless tests for the game scene rules.
//!
//! The real `MenuPlugin` + `GameScenePlugin` run on top of [`MinimalPlugins`].
//! There is no Rapier pipeline: aliens do not fall on their own, and overlaps
//! are injected as `CollisionEvent` messages exactly as Rapier would emit them.
//! Time advances a fixed 100 ms per update via `TimeUpdateStrategy`.

use alien_blaster::config::GameConfig;
use alien_blaster::game::{
    Alien, Explosion, GameScenePlugin, Missile, PowerUpBanner, ScoreText, Session, Ship,
};
use alien_blaster::graphics::{GameAssets, MenuAssets};
use alien_blaster::menu::{GameOverPrompt, GameOverRoot, GameState, MenuPlugin};
use alien_blaster::playfield::Playfield;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
use std::time::Duration;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Headless app already inside a freshly started game scene.
fn playing_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
        100,
    )));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(MenuAssets::default());
    app.insert_resource(GameAssets::default());
    app.add_plugins((MenuPlugin, GameScenePlugin));

    app.update(); // settle into MainMenu
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update(); // OnEnter(Playing) builds the scene
    app
}

fn playfield() -> Playfield {
    GameConfig::default().playfield()
}

fn entities<T: Component>(app: &mut App) -> Vec<Entity> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<T>>();
    query.iter(world).collect()
}

fn count<T: Component>(app: &mut App) -> usize {
    entities::<T>(app).len()
}

fn single<T: Component>(app: &mut App) -> Entity {
    let all = entities::<T>(app);
    assert_eq!(all.len(), 1, "expected exactly one {}", std::any::type_name::<T>());
    all[0]
}

/// Playfield position (y down) of an entity.
fn pos(app: &App, entity: Entity) -> Vec2 {
    let transform = app
        .world()
        .get::<Transform>(entity)
        .expect("entity has a transform");
    playfield().to_playfield(transform.translation.truncate())
}

fn set_pos(app: &mut App, entity: Entity, p: Vec2) {
    let world_pos = playfield().to_world(p);
    let mut transform = app
        .world_mut()
        .get_mut::<Transform>(entity)
        .expect("entity has a transform");
    transform.translation.x = world_pos.x;
    transform.translation.y = world_pos.y;
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
}

fn collide(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .write_message(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
}

fn session(app: &App) -> Session {
    app.world().resource::<Session>().clone()
}

fn score_text(app: &mut App) -> String {
    let entity = single::<ScoreText>(app);
    app.world()
        .get::<Text>(entity)
        .expect("score text")
        .0
        .clone()
}

fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Tap Space for one frame and return the new missile.
fn fire_once(app: &mut App) -> Entity {
    let before = entities::<Missile>(app);
    press(app, KeyCode::Space);
    app.update();
    release(app, KeyCode::Space);
    app.update();
    entities::<Missile>(app)
        .into_iter()
        .find(|e| !before.contains(e))
        .expect("a new missile")
}

fn sounds(app: &mut App) -> usize {
    count::<AudioPlayer>(app)
}

// ── Scene start ───────────────────────────────────────────────────────────────

#[test]
fn scene_starts_with_one_ship_one_alien_and_zero_score() {
    let mut app = playing_app();

    assert_eq!(count::<Ship>(&mut app), 1);
    assert_eq!(count::<Alien>(&mut app), 1);
    assert_eq!(count::<Missile>(&mut app), 0);
    assert_eq!(score_text(&mut app), "Score: 0");
    assert_eq!(session(&app), Session::default());

    let ship = single::<Ship>(&mut app);
    assert_eq!(pos(&app, ship), Vec2::new(960.0, 980.0));
}

#[test]
fn first_alien_spawns_above_the_top_edge_in_range() {
    let mut app = playing_app();
    let alien = single::<Alien>(&mut app);
    let p = pos(&app, alien);
    assert_eq!(p.y, -99.0);
    assert!((2.0..=1921.0).contains(&p.x), "x = {}", p.x);

    let velocity = app.world().get::<Velocity>(alien).expect("alien velocity");
    // World space is y-up: falling means negative y.
    assert_eq!(velocity.linvel.y, -200.0);
    assert!((2.0..=51.0).contains(&velocity.linvel.x.abs()));
}

// ── Ship movement ─────────────────────────────────────────────────────────────

#[test]
fn held_arrow_moves_ship_every_frame() {
    let mut app = playing_app();
    let ship = single::<Ship>(&mut app);

    press(&mut app, KeyCode::ArrowLeft);
    app.update();
    assert_eq!(pos(&app, ship), Vec2::new(945.0, 980.0));
    app.update();
    assert_eq!(pos(&app, ship), Vec2::new(930.0, 980.0));

    release(&mut app, KeyCode::ArrowLeft);
    press(&mut app, KeyCode::ArrowUp);
    app.update();
    assert_eq!(pos(&app, ship), Vec2::new(930.0, 965.0));
}

#[test]
fn ship_wraps_horizontally() {
    let mut app = playing_app();
    let ship = single::<Ship>(&mut app);

    set_pos(&mut app, ship, Vec2::new(5.0, 500.0));
    press(&mut app, KeyCode::ArrowLeft);
    app.update();
    assert_eq!(pos(&app, ship).x, 1920.0);

    release(&mut app, KeyCode::ArrowLeft);
    press(&mut app, KeyCode::ArrowRight);
    app.update();
    assert_eq!(pos(&app, ship).x, 0.0, "x > 1920 must wrap to 0");
}

#[test]
fn ship_wraps_vertically() {
    let mut app = playing_app();
    let ship = single::<Ship>(&mut app);

    set_pos(&mut app, ship, Vec2::new(500.0, 1075.0));
    press(&mut app, KeyCode::ArrowDown);
    app.update();
    assert_eq!(pos(&app, ship).y, 0.0);

    release(&mut app, KeyCode::ArrowDown);
    press(&mut app, KeyCode::ArrowUp);
    app.update();
    assert_eq!(pos(&app, ship).y, 1080.0, "y < 0 must wrap to 1080");
}

#[test]
fn ship_never_leaves_the_playfield() {
    let mut app = playing_app();
    let ship = single::<Ship>(&mut app);
    press(&mut app, KeyCode::ArrowRight);
    press(&mut app, KeyCode::ArrowDown);
    for _ in 0..300 {
        app.update();
        let p = pos(&app, ship);
        assert!((0.0..=1920.0).contains(&p.x), "x = {}", p.x);
        assert!((0.0..=1080.0).contains(&p.y), "y = {}", p.y);
    }
}

// ── Firing ────────────────────────────────────────────────────────────────────

#[test]
fn holding_space_fires_exactly_one_missile() {
    let mut app = playing_app();
    let sounds_before = sounds(&mut app);

    press(&mut app, KeyCode::Space);
    for _ in 0..5 {
        app.update();
    }

    assert_eq!(count::<Missile>(&mut app), 1);
    assert!(session(&app).fire_lock);
    assert_eq!(sounds(&mut app), sounds_before + 1, "one laser sound");
}

#[test]
fn releasing_space_rearms_the_fire_key() {
    let mut app = playing_app();

    fire_once(&mut app);
    assert!(!session(&app).fire_lock);
    fire_once(&mut app);

    assert_eq!(count::<Missile>(&mut app), 2);
}

#[test]
fn missile_leaves_from_the_ship_and_climbs() {
    let mut app = playing_app();

    press(&mut app, KeyCode::Space);
    app.update();
    let missile = single::<Missile>(&mut app);
    // Spawned at the ship (y = 980) and advanced once in the same frame.
    assert_eq!(pos(&app, missile), Vec2::new(960.0, 965.0));

    app.update();
    assert_eq!(pos(&app, missile).y, 950.0);
}

#[test]
fn missile_is_destroyed_only_once_above_the_top() {
    let mut app = playing_app();
    let missile = fire_once(&mut app);

    set_pos(&mut app, missile, Vec2::new(960.0, 15.0));
    app.update();
    assert_eq!(pos(&app, missile).y, 0.0, "y = 0 is still on the playfield");

    app.update();
    assert!(
        app.world().get_entity(missile).is_err(),
        "missile past the top edge must be despawned"
    );
}

// ── Missile / alien ───────────────────────────────────────────────────────────

#[test]
fn missile_hit_scores_and_spawns_two_aliens() {
    let mut app = playing_app();
    let alien = single::<Alien>(&mut app);
    let missile = fire_once(&mut app);
    let sounds_before = sounds(&mut app);

    collide(&mut app, missile, alien);
    app.update();

    assert!(app.world().get_entity(missile).is_err());
    assert!(app.world().get_entity(alien).is_err());
    assert_eq!(session(&app).score, 1);
    assert_eq!(score_text(&mut app), "Score: 1");
    assert_eq!(count::<Alien>(&mut app), 2, "two replacements");
    assert_eq!(count::<Explosion>(&mut app), 1);
    assert_eq!(sounds(&mut app), sounds_before + 1, "one explosion sound");
}

#[test]
fn collision_order_in_the_event_does_not_matter() {
    let mut app = playing_app();
    let alien = single::<Alien>(&mut app);
    let missile = fire_once(&mut app);

    collide(&mut app, alien, missile);
    app.update();

    assert_eq!(session(&app).score, 1);
}

#[test]
fn explosion_disappears_after_half_a_second() {
    let mut app = playing_app();
    let alien = single::<Alien>(&mut app);
    let explosion_at = pos(&app, alien);
    let missile = fire_once(&mut app);

    collide(&mut app, missile, alien);
    app.update();

    let explosion = single::<Explosion>(&mut app);
    assert_eq!(pos(&app, explosion), explosion_at);
    let scale = app.world().get::<Transform>(explosion).unwrap().scale;
    assert_eq!(scale, Vec3::splat(0.3));

    for _ in 0..3 {
        app.update();
    }
    assert_eq!(count::<Explosion>(&mut app), 1, "gone too early");

    for _ in 0..4 {
        app.update();
    }
    assert_eq!(count::<Explosion>(&mut app), 0, "still there after 0.5 s");
}

#[test]
fn one_missile_downs_at_most_one_alien_per_frame() {
    let mut app = playing_app();
    let first = single::<Alien>(&mut app);
    let m1 = fire_once(&mut app);
    collide(&mut app, m1, first);
    app.update();

    let aliens = entities::<Alien>(&mut app);
    assert_eq!(aliens.len(), 2);
    let m2 = fire_once(&mut app);
    collide(&mut app, m2, aliens[0]);
    collide(&mut app, m2, aliens[1]);
    app.update();

    assert_eq!(session(&app).score, 2, "score must rise by exactly one");
    assert!(app.world().get_entity(aliens[1]).is_ok());
}

#[test]
fn score_rises_by_one_per_hit_without_gaps() {
    let mut app = playing_app();
    for expected in 1..=4 {
        let alien = entities::<Alien>(&mut app)[0];
        let missile = fire_once(&mut app);
        collide(&mut app, missile, alien);
        app.update();
        assert_eq!(session(&app).score, expected);
        assert_eq!(score_text(&mut app), format!("Score: {expected}"));
    }
}

#[test]
fn stopped_events_are_ignored() {
    let mut app = playing_app();
    let alien = single::<Alien>(&mut app);
    let missile = fire_once(&mut app);

    app.world_mut().write_message(CollisionEvent::Stopped(
        missile,
        alien,
        CollisionEventFlags::empty(),
    ));
    app.update();

    assert_eq!(session(&app).score, 0);
    assert!(app.world().get_entity(alien).is_ok());
}

// ── Power-up ──────────────────────────────────────────────────────────────────

fn set_score(app: &mut App, score: u32) {
    app.world_mut().resource_mut::<Session>().score = score;
}

#[test]
fn no_banner_below_fifteen() {
    let mut app = playing_app();
    set_score(&mut app, 14);
    app.update();
    assert_eq!(count::<PowerUpBanner>(&mut app), 0);
}

#[test]
fn banner_appears_at_fifteen_and_expires_after_seven_seconds() {
    let mut app = playing_app();
    set_score(&mut app, 15);
    app.update();
    assert_eq!(count::<PowerUpBanner>(&mut app), 1);

    for _ in 0..60 {
        app.update();
    }
    assert_eq!(count::<PowerUpBanner>(&mut app), 1, "banner gone before 7 s");

    for _ in 0..15 {
        app.update();
    }
    assert_eq!(count::<PowerUpBanner>(&mut app), 0, "banner outlived 7 s");
    assert!(session(&app).power_banner_shown, "shown once, not re-shown");
}

#[test]
fn banner_is_removed_as_soon_as_score_leaves_fifteen() {
    let mut app = playing_app();
    set_score(&mut app, 15);
    app.update();
    assert_eq!(count::<PowerUpBanner>(&mut app), 1);

    set_score(&mut app, 16);
    app.update();
    assert_eq!(count::<PowerUpBanner>(&mut app), 0);
}

#[test]
fn reaching_fifteen_by_a_hit_triggers_the_banner() {
    let mut app = playing_app();
    set_score(&mut app, 14);
    let alien = single::<Alien>(&mut app);
    let missile = fire_once(&mut app);
    collide(&mut app, missile, alien);
    app.update();

    assert_eq!(session(&app).score, 15);
    assert_eq!(
        count::<PowerUpBanner>(&mut app),
        1,
        "banner must appear in the frame the score reaches 15"
    );
}

#[test]
fn leaving_fifteen_by_a_hit_removes_the_banner_in_the_same_frame() {
    let mut app = playing_app();
    set_score(&mut app, 15);
    app.update();
    assert_eq!(count::<PowerUpBanner>(&mut app), 1);

    let alien = entities::<Alien>(&mut app)[0];
    let missile = fire_once(&mut app);
    assert_eq!(count::<PowerUpBanner>(&mut app), 1);
    collide(&mut app, missile, alien);
    app.update();

    assert_eq!(session(&app).score, 16);
    assert_eq!(
        count::<PowerUpBanner>(&mut app),
        0,
        "banner must be gone in the frame the score leaves 15"
    );
}

#[test]
fn power_up_doubles_missile_speed() {
    let mut app = playing_app();
    set_score(&mut app, 15);

    press(&mut app, KeyCode::Space);
    app.update();
    let missile = single::<Missile>(&mut app);
    assert_eq!(pos(&app, missile).y, 950.0, "980 - 2 × 15");

    app.update();
    assert_eq!(pos(&app, missile).y, 920.0);
}

#[test]
fn power_up_recycles_aliens_past_the_bottom() {
    let mut app = playing_app();
    set_score(&mut app, 15);
    let alien = single::<Alien>(&mut app);

    set_pos(&mut app, alien, Vec2::new(700.0, 1100.0));
    app.update();

    let p = pos(&app, alien);
    assert_eq!(p.y, -99.0);
    assert!((2.0..=1921.0).contains(&p.x), "x = {}", p.x);
}

#[test]
fn without_power_up_aliens_fall_away() {
    let mut app = playing_app();
    let alien = single::<Alien>(&mut app);

    set_pos(&mut app, alien, Vec2::new(700.0, 1100.0));
    app.update();

    assert_eq!(pos(&app, alien), Vec2::new(700.0, 1100.0));
}

// ── Ship / alien ──────────────────────────────────────────────────────────────

#[test]
fn ship_collision_ends_the_game() {
    let mut app = playing_app();
    let ship = single::<Ship>(&mut app);
    let alien = single::<Alien>(&mut app);
    let sounds_before = sounds(&mut app);

    collide(&mut app, ship, alien);
    app.update();

    assert!(app.world().get_entity(ship).is_err());
    assert!(app.world().get_entity(alien).is_err());
    assert!(session(&app).game_over);
    assert_eq!(sounds(&mut app), sounds_before + 1, "one bomb sound");

    app.update();
    assert_eq!(state(&app), GameState::GameOver);
    assert_eq!(count::<GameOverRoot>(&mut app), 1);
}

#[test]
fn world_is_frozen_after_game_over() {
    let mut app = playing_app();
    let ship = single::<Ship>(&mut app);
    let alien = single::<Alien>(&mut app);
    let missile = fire_once(&mut app);

    collide(&mut app, ship, alien);
    app.update();
    let frozen_at = pos(&app, missile);
    let score = session(&app).score;

    press(&mut app, KeyCode::Space);
    press(&mut app, KeyCode::ArrowLeft);
    for _ in 0..10 {
        app.update();
    }

    assert_eq!(pos(&app, missile), frozen_at, "missile moved after game over");
    assert_eq!(count::<Missile>(&mut app), 1, "fired after game over");
    assert_eq!(count::<Alien>(&mut app), 0);
    assert_eq!(session(&app).score, score);
}

#[test]
fn clicking_the_prompt_restarts_a_fresh_game() {
    let mut app = playing_app();
    set_score(&mut app, 7);
    let ship = single::<Ship>(&mut app);
    let alien = single::<Alien>(&mut app);
    let old_text = single::<ScoreText>(&mut app);
    fire_once(&mut app);

    collide(&mut app, ship, alien);
    app.update();
    app.update();
    assert_eq!(state(&app), GameState::GameOver);

    let prompt = single::<GameOverPrompt>(&mut app);
    app.world_mut()
        .entity_mut(prompt)
        .insert(Interaction::Pressed);
    app.update(); // prompt requests Playing
    app.update(); // OnExit(GameOver) + OnEnter(Playing)

    assert_eq!(state(&app), GameState::Playing);
    assert_eq!(session(&app), Session::default());
    assert_eq!(count::<GameOverRoot>(&mut app), 0);
    assert_eq!(count::<Missile>(&mut app), 0);
    assert_eq!(count::<Ship>(&mut app), 1);
    assert_eq!(count::<Alien>(&mut app), 1);
    assert_ne!(single::<ScoreText>(&mut app), old_text, "fresh score text");
    assert_eq!(score_text(&mut app), "Score: 0");
}

#[test]
fn restarted_game_accepts_input_again() {
    let mut app = playing_app();
    let ship = single::<Ship>(&mut app);
    let alien = single::<Alien>(&mut app);
    collide(&mut app, ship, alien);
    app.update();
    app.update();

    press(&mut app, KeyCode::Enter);
    app.update();
    app.update();
    release(&mut app, KeyCode::Enter);
    assert_eq!(state(&app), GameState::Playing);

    let ship = single::<Ship>(&mut app);
    press(&mut app, KeyCode::ArrowRight);
    app.update();
    assert_eq!(pos(&app, ship), Vec2::new(975.0, 980.0));
}
