//! Reference presentation layer
//!
//! `DrawerView` consumes session events and keeps what a UI needs to draw:
//! one view record per item plus the four HUD strings. It also owns the
//! per-item input lock that stops a shaking or celebrating item from
//! forwarding another click. The session itself knows nothing about
//! animation timing.

use std::time::Duration;

use glam::{Mat2, Vec2};
use serde::Serialize;

use crate::catalog::ItemId;
use crate::consts::{CELEBRATE_DURATION, SHAKE_DURATION};
use crate::sim::{GameEvent, PresentationSink, Severity};
use crate::{clicks_label, found_label, timer_label};

/// Drawable state of one placed item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub item_id: ItemId,
    pub name: String,
    pub icon: String,
    pub is_target: bool,
    pub position: Vec2,
    pub rotation_degrees: f32,
    /// Set while the item animates; clicks on it are swallowed
    pub input_locked: bool,
    #[serde(skip)]
    locked_until: Option<Duration>,
}

impl ItemView {
    /// Hit test against the rotated square footprint
    pub fn contains(&self, point: Vec2, footprint: f32) -> bool {
        let local = Mat2::from_angle(-self.rotation_degrees.to_radians()) * (point - self.position);
        let half = footprint * 0.5;
        local.x.abs() <= half && local.y.abs() <= half
    }
}

/// View model driven by `GameEvent`s
#[derive(Debug, Clone, Serialize)]
pub struct DrawerView {
    footprint: f32,
    items: Vec<ItemView>,
    clicks_text: String,
    timer_text: String,
    found_text: String,
    message: String,
    message_severity: Severity,
}

impl DrawerView {
    pub fn new(footprint: f32) -> Self {
        Self {
            footprint,
            items: Vec::new(),
            clicks_text: clicks_label(0),
            timer_text: timer_label(0),
            found_text: found_label(false).to_string(),
            message: String::new(),
            message_severity: Severity::Neutral,
        }
    }

    /// Items in draw order (later entries draw on top)
    pub fn items(&self) -> &[ItemView] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&ItemView> {
        self.items.iter().find(|v| v.item_id == id)
    }

    pub fn clicks_text(&self) -> &str {
        &self.clicks_text
    }

    pub fn timer_text(&self) -> &str {
        &self.timer_text
    }

    pub fn found_text(&self) -> &str {
        &self.found_text
    }

    pub fn message(&self) -> (&str, Severity) {
        (&self.message, self.message_severity)
    }

    /// Topmost item under `point` (container coordinates)
    pub fn item_at(&self, point: Vec2) -> Option<ItemId> {
        self.items
            .iter()
            .rev()
            .find(|v| v.contains(point, self.footprint))
            .map(|v| v.item_id)
    }

    /// Gate a pointer click before it reaches the session
    ///
    /// Returns false if the item is unknown or still animating. Otherwise
    /// locks it for its animation (shake for decoys, celebration for the
    /// target) and returns true; the caller then forwards the click.
    pub fn try_click(&mut self, id: ItemId, now: Duration) -> bool {
        let Some(view) = self.items.iter_mut().find(|v| v.item_id == id) else {
            return false;
        };
        if view.input_locked {
            return false;
        }
        let lock = if view.is_target {
            CELEBRATE_DURATION
        } else {
            SHAKE_DURATION
        };
        view.input_locked = true;
        view.locked_until = Some(now + Duration::from_secs_f32(lock));
        true
    }

    /// Release locks whose animation has finished
    pub fn advance(&mut self, now: Duration) {
        for view in &mut self.items {
            if view.locked_until.is_some_and(|until| now >= until) {
                view.input_locked = false;
                view.locked_until = None;
            }
        }
    }
}

impl PresentationSink for DrawerView {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::ItemsCleared => self.items.clear(),
            GameEvent::ItemPlaced {
                item_id,
                display_name,
                icon,
                is_target,
                x,
                y,
                rotation_degrees,
            } => self.items.push(ItemView {
                item_id,
                name: display_name,
                icon,
                is_target,
                position: Vec2::new(x, y),
                rotation_degrees,
                input_locked: false,
                locked_until: None,
            }),
            GameEvent::ClicksUpdated { count } => self.clicks_text = clicks_label(count),
            GameEvent::TimerUpdated { seconds } => self.timer_text = timer_label(seconds),
            GameEvent::FoundUpdated { found } => self.found_text = found_label(found).to_string(),
            GameEvent::MessageShown { text, severity } => {
                self.message = text;
                self.message_severity = severity;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(id: u32, is_target: bool, x: f32, y: f32, rotation_degrees: f32) -> GameEvent {
        GameEvent::ItemPlaced {
            item_id: ItemId(id),
            display_name: format!("item{}", id),
            icon: "?".into(),
            is_target,
            x,
            y,
            rotation_degrees,
        }
    }

    #[test]
    fn test_hud_labels_follow_events() {
        let mut view = DrawerView::new(80.0);
        assert_eq!(view.clicks_text(), "0");
        assert_eq!(view.timer_text(), "0s");
        assert_eq!(view.found_text(), "0/1");

        view.emit(GameEvent::ClicksUpdated { count: 3 });
        view.emit(GameEvent::TimerUpdated { seconds: 12 });
        view.emit(GameEvent::FoundUpdated { found: true });
        view.emit(GameEvent::MessageShown {
            text: "done".into(),
            severity: Severity::Success,
        });
        assert_eq!(view.clicks_text(), "3");
        assert_eq!(view.timer_text(), "12s");
        assert_eq!(view.found_text(), "1/1");
        assert_eq!(view.message(), ("done", Severity::Success));
    }

    #[test]
    fn test_items_cleared_between_rounds() {
        let mut view = DrawerView::new(80.0);
        view.emit(placed(0, false, 0.0, 0.0, 0.0));
        view.emit(placed(1, true, 5.0, 5.0, 90.0));
        assert_eq!(view.items().len(), 2);

        view.emit(GameEvent::ItemsCleared);
        assert!(view.items().is_empty());
        assert!(view.item(ItemId(0)).is_none());
    }

    #[test]
    fn test_input_lock_durations() {
        let mut view = DrawerView::new(80.0);
        view.emit(placed(0, false, 0.0, 0.0, 0.0));
        view.emit(placed(1, true, 100.0, 0.0, 0.0));
        let t0 = Duration::from_secs(1);

        assert!(view.try_click(ItemId(0), t0));
        assert!(view.item(ItemId(0)).unwrap().input_locked);
        assert!(!view.try_click(ItemId(0), t0));

        view.advance(t0 + Duration::from_millis(499));
        assert!(!view.try_click(ItemId(0), t0 + Duration::from_millis(499)));
        view.advance(t0 + Duration::from_millis(500));
        assert!(!view.item(ItemId(0)).unwrap().input_locked);

        assert!(view.try_click(ItemId(1), t0));
        view.advance(t0 + Duration::from_secs(1));
        assert!(view.item(ItemId(1)).unwrap().input_locked);
        view.advance(t0 + Duration::from_millis(1500));
        assert!(!view.item(ItemId(1)).unwrap().input_locked);

        assert!(!view.try_click(ItemId(7), t0));
    }

    #[test]
    fn test_hit_testing_respects_rotation_and_stacking() {
        let mut view = DrawerView::new(80.0);
        view.emit(placed(0, false, 0.0, 0.0, 45.0));
        view.emit(placed(1, false, 30.0, 0.0, 0.0));

        // Corner of an axis-aligned square is outside the 45-degree diamond
        assert!(!view.items()[0].contains(Vec2::new(-39.0, 39.0), 80.0));
        assert!(view.items()[0].contains(Vec2::new(-50.0, 0.0), 80.0));

        // Overlap goes to the item drawn last
        assert_eq!(view.item_at(Vec2::new(20.0, 0.0)), Some(ItemId(1)));
        assert_eq!(view.item_at(Vec2::new(-50.0, 0.0)), Some(ItemId(0)));
        assert_eq!(view.item_at(Vec2::new(300.0, 300.0)), None);
    }
}
