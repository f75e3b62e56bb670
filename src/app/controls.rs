//! Demo control scheme
//!
//! The actions the demo game reads each tick, with their default bindings.

use std::sync::Arc;

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::input::{Behavior, GameAction, InputManager, KeyCode, MouseCode};

/// Actions driving the demo game
#[derive(Debug)]
pub struct Controls {
    pub move_left: Arc<GameAction>,
    pub move_right: Arc<GameAction>,
    pub move_up: Arc<GameAction>,
    pub move_down: Arc<GameAction>,
    pub jump: Arc<GameAction>,
    pub fire: Arc<GameAction>,
    pub zoom_in: Arc<GameAction>,
    pub zoom_out: Arc<GameAction>,
    pub toggle_mouse: Arc<GameAction>,
    pub exit: Arc<GameAction>,
}

fn action(name: &str) -> Arc<GameAction> {
    Arc::new(GameAction::new(name))
}

fn once(name: &str) -> Arc<GameAction> {
    Arc::new(GameAction::with_behavior(
        name,
        Behavior::DetectInitialPressOnly,
    ))
}

impl Controls {
    pub fn new() -> Self {
        Self {
            move_left: action("move-left"),
            move_right: action("move-right"),
            move_up: action("move-up"),
            move_down: action("move-down"),
            jump: once("jump"),
            fire: once("fire"),
            zoom_in: action("zoom-in"),
            zoom_out: action("zoom-out"),
            toggle_mouse: once("toggle-mouse"),
            exit: once("exit"),
        }
    }

    /// All actions, in display order
    pub fn all(&self) -> [&Arc<GameAction>; 10] {
        [
            &self.move_left,
            &self.move_right,
            &self.move_up,
            &self.move_down,
            &self.jump,
            &self.fire,
            &self.zoom_in,
            &self.zoom_out,
            &self.toggle_mouse,
            &self.exit,
        ]
    }

    /// Installs the default bindings
    pub fn bind(&self, input: &InputManager) {
        input.map_to_key(&self.move_left, KeyCode::A);
        input.map_to_key(&self.move_left, KeyCode::LEFT);
        input.map_to_mouse(&self.move_left, MouseCode::MoveLeft);

        input.map_to_key(&self.move_right, KeyCode::D);
        input.map_to_key(&self.move_right, KeyCode::RIGHT);
        input.map_to_mouse(&self.move_right, MouseCode::MoveRight);

        input.map_to_key(&self.move_up, KeyCode::W);
        input.map_to_key(&self.move_up, KeyCode::UP);
        input.map_to_mouse(&self.move_up, MouseCode::MoveUp);

        input.map_to_key(&self.move_down, KeyCode::S);
        input.map_to_key(&self.move_down, KeyCode::DOWN);
        input.map_to_mouse(&self.move_down, MouseCode::MoveDown);

        input.map_to_key(&self.jump, KeyCode::SPACE);
        input.map_to_key(&self.fire, KeyCode::CONTROL_LEFT);
        input.map_to_mouse(&self.fire, MouseCode::Button1);

        input.map_to_mouse(&self.zoom_in, MouseCode::WheelUp);
        input.map_to_mouse(&self.zoom_out, MouseCode::WheelDown);

        input.map_to_key(&self.toggle_mouse, KeyCode::TAB);
        input.map_to_mouse(&self.toggle_mouse, MouseCode::Button3);
        input.map_to_key(&self.exit, KeyCode::ESCAPE);
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the bindings of every control as a table
pub fn format_bindings(controls: &Controls, input: &InputManager) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Action", "Behavior", "Inputs"]);

    for action in controls.all() {
        let behavior = match action.behavior() {
            Behavior::Normal => "held",
            Behavior::DetectInitialPressOnly => "once",
        };
        let mappings = input.mappings(action);
        let inputs = if mappings.is_empty() {
            "(unbound)".dimmed().to_string()
        } else {
            mappings.join(", ")
        };
        builder.push_record([action.name(), behavior, &inputs]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
