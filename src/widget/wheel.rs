//! Scroll-snap wheel selector.
//!
//! A wheel is a vertical list of rows of equal height with three rows visible; the
//! middle row is the selection. The host platform reports scroll gestures as
//! [`ScrollEvent`]s and the selector answers with the value to commit (if any) and
//! where the scroll container should move (if anywhere). The gesture reducer itself
//! is [`resolve_index`], a pure function of the offset.

use std::fmt::Debug;
use tracing::debug;

/// Row pitch of every wheel. Fixed: offsets in scroll events are measured in
/// these units and the form maps one terminal row to one wheel row.
pub const ROW_HEIGHT: f32 = 44.0;
pub const VISIBLE_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct WheelItem<V> {
    pub label: String,
    pub value: V,
}

impl<V> WheelItem<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        WheelItem {
            label: label.into(),
            value,
        }
    }
}

/// Index of the row nearest to `offset`, or `None` when that row does not exist.
pub fn resolve_index(offset: f32, row_height: f32, item_count: usize) -> Option<usize> {
    if item_count == 0 || !(row_height > 0.0) || !offset.is_finite() {
        return None;
    }
    let index = (offset / row_height).round();
    if index < 0.0 || index >= item_count as f32 {
        return None;
    }
    Some(index as usize)
}

/// Platform gesture events, in the order a drag produces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    BeginDrag,
    Scroll { offset: f32 },
    /// The drag was released and momentum has settled at `offset`.
    MomentumEnd { offset: f32 },
}

/// A scroll the selector asks the container to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTo {
    pub offset: f32,
    pub animated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelOutput<V> {
    /// Value to hand to the host's change handler.
    pub value: Option<V>,
    pub scroll_to: Option<ScrollTo>,
}

impl<V> WheelOutput<V> {
    fn none() -> Self {
        WheelOutput {
            value: None,
            scroll_to: None,
        }
    }
}

/// One of the visible rows, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelRow {
    pub index: usize,
    pub label: String,
    /// Row holds the host's current value.
    pub selected: bool,
    /// Row sits in the middle slot at the current scroll position.
    pub centered: bool,
}

#[derive(Debug, Clone)]
pub struct WheelSelector<V> {
    items: Vec<WheelItem<V>>,
    row_height: f32,
    offset: f32,
    dragging: bool,
    committed: Option<V>,
}

impl<V: Clone + PartialEq + Debug> WheelSelector<V> {
    pub fn new(items: Vec<WheelItem<V>>) -> Self {
        WheelSelector {
            items,
            row_height: ROW_HEIGHT,
            offset: 0.0,
            dragging: false,
            committed: None,
        }
    }

    pub fn items(&self) -> &[WheelItem<V>] {
        &self.items
    }

    /// Replaces the rows, e.g. when the day list follows a month change. The scroll
    /// position is kept; the next `sync` recenters it.
    pub fn set_items(&mut self, items: Vec<WheelItem<V>>) {
        self.items = items;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Largest offset the container can scroll to.
    pub fn max_offset(&self) -> f32 {
        self.items.len().saturating_sub(1) as f32 * self.row_height
    }

    pub fn index_of(&self, value: &V) -> Option<usize> {
        self.items.iter().position(|item| &item.value == value)
    }

    /// Row holding the host's current value.
    pub fn selected_index(&self) -> Option<usize> {
        self.committed.as_ref().and_then(|v| self.index_of(v))
    }

    pub fn centered_index(&self) -> Option<usize> {
        resolve_index(self.offset, self.row_height, self.items.len())
    }

    /// Accepts the host's current value. Outside a drag the wheel jumps, without
    /// animation, so that value sits in the middle row. A value that is not in the
    /// list leaves the scroll position alone.
    pub fn sync(&mut self, selected: &V) -> Option<ScrollTo> {
        self.committed = Some(selected.clone());
        if self.dragging {
            return None;
        }
        let index = self.index_of(selected)?;
        let target = index as f32 * self.row_height;
        if self.offset == target {
            return None;
        }
        self.offset = target;
        Some(ScrollTo {
            offset: target,
            animated: false,
        })
    }

    pub fn handle(&mut self, event: ScrollEvent) -> WheelOutput<V> {
        match event {
            ScrollEvent::BeginDrag => {
                self.dragging = true;
                WheelOutput::none()
            }
            ScrollEvent::Scroll { offset } => {
                self.offset = offset;
                let Some(index) = resolve_index(offset, self.row_height, self.items.len()) else {
                    return WheelOutput::none();
                };
                let value = self.items[index].value.clone();
                if self.committed.as_ref() == Some(&value) {
                    return WheelOutput::none();
                }
                debug!(index, ?value, "wheel live update");
                self.committed = Some(value.clone());
                WheelOutput {
                    value: Some(value),
                    scroll_to: None,
                }
            }
            ScrollEvent::MomentumEnd { offset } => {
                self.dragging = false;
                if self.items.is_empty() {
                    self.offset = offset;
                    return WheelOutput::none();
                }
                let last = self.items.len() - 1;
                let index = resolve_index(offset, self.row_height, self.items.len()).unwrap_or(
                    if offset <= 0.0 || !offset.is_finite() {
                        0
                    } else {
                        last
                    },
                );
                let target = index as f32 * self.row_height;
                let value = self.items[index].value.clone();
                debug!(index, from = offset, to = target, ?value, "wheel snap");
                self.offset = target;
                self.committed = Some(value.clone());
                WheelOutput {
                    value: Some(value),
                    scroll_to: Some(ScrollTo {
                        offset: target,
                        animated: true,
                    }),
                }
            }
        }
    }

    /// Keyboard/stepper adapter: a complete drag of `rows` rows from the current
    /// position, with the offset clamped the way a scroll container clamps it.
    /// Returns the last value the wheel emitted during the gesture.
    pub fn nudge(&mut self, rows: i32) -> Option<V> {
        if self.items.is_empty() || rows == 0 {
            return None;
        }
        let target = (self.offset + rows as f32 * self.row_height).clamp(0.0, self.max_offset());
        let mut last = None;
        for event in [
            ScrollEvent::BeginDrag,
            ScrollEvent::Scroll { offset: target },
            ScrollEvent::MomentumEnd { offset: target },
        ] {
            if let Some(v) = self.handle(event).value {
                last = Some(v);
            }
        }
        last
    }

    /// The rows currently in view: the centered row and its neighbours.
    pub fn visible_rows(&self) -> Vec<WheelRow> {
        if self.items.is_empty() {
            return Vec::new();
        }
        let last = self.items.len() - 1;
        let center = self.centered_index().unwrap_or(if self.offset <= 0.0 { 0 } else { last });
        let selected = self.selected_index();
        let half = VISIBLE_ROWS / 2;
        (center.saturating_sub(half)..=(center + half).min(last))
            .map(|index| WheelRow {
                index,
                label: self.items[index].label.clone(),
                selected: Some(index) == selected,
                centered: index == center,
            })
            .collect()
    }
}

/// Items `first..=last` labelled with zero-padded numbers.
pub fn numeric_items(first: u32, last: u32, step: u32) -> Vec<WheelItem<u32>> {
    (first..=last)
        .step_by(step.max(1) as usize)
        .map(|n| WheelItem::new(format!("{n:02}"), n))
        .collect()
}
