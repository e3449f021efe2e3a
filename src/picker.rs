//! Picker panel state: the wheel, the hex/R/G/B fields, the swatch and the
//! single-shot result of a pick.
//!
//! Every change funnels through [`Picker::update`], which refreshes all
//! controls except the one the edit came from, so a field being typed into
//! is never rewritten under the cursor.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use log::{debug, info};

use crate::color::{COLOR_MASK, parse_channel_field, parse_hex_field, to_hex, unpack_rgb};
use crate::error::Result;
use crate::math;
use crate::raster::{Canvas, Surface};
use crate::wheel::{ColorWheel, WheelGeometry};

/// How a pick ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Chosen(u32),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    fn shift(self) -> u32 {
        match self {
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
        }
    }
}

/// Control an edit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSource {
    /// Programmatic change; every control is refreshed.
    External,
    Hex,
    Channel(Channel),
    Wheel,
}

/// Text shown in the panel's input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub hex: String,
    pub red: String,
    pub green: String,
    pub blue: String,
}

impl Fields {
    pub fn channel(&self, channel: Channel) -> &str {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut String {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }
}

pub struct Picker<S: Surface> {
    wheel: ColorWheel<S>,
    color: u32,
    fields: Fields,
    swatch: String,
    open: bool,
    done: Option<oneshot::Sender<PickOutcome>>,
    /// Latest color reported by the wheel's drag callback, not yet applied.
    wheel_updates: Rc<Cell<Option<u32>>>,
}

impl<S: Surface> Picker<S> {
    pub fn new<C>(canvas: &mut C, geometry: WheelGeometry) -> Result<Self>
    where
        C: Canvas<Surface = S>,
    {
        let mut wheel = ColorWheel::new(canvas, geometry)?;
        wheel.draw();
        Ok(Self {
            wheel,
            color: 0,
            fields: Fields::default(),
            swatch: String::new(),
            open: false,
            done: None,
            wheel_updates: Rc::new(Cell::new(None)),
        })
    }

    /// Open the panel on `color` and wait for the user to commit or cancel.
    ///
    /// A second `pick` before the first resolves supersedes it; the earlier
    /// future resolves as [`PickOutcome::Cancelled`].
    pub fn pick(&mut self, color: u32) -> impl Future<Output = PickOutcome> + use<S> {
        let (tx, rx) = oneshot::channel();
        if self.done.replace(tx).is_some() {
            debug!("pending pick superseded");
        }
        self.open = true;
        self.update(color, EditSource::External);
        debug!("pick opened on #{}", to_hex(self.color));
        async move { rx.await.unwrap_or(PickOutcome::Cancelled) }
    }

    /// Make `color` current and refresh every control except `source`.
    pub fn update(&mut self, color: u32, source: EditSource) {
        self.color = color & COLOR_MASK;
        let hex = to_hex(self.color);
        if source != EditSource::Hex {
            self.fields.hex = hex.clone();
        }
        self.swatch = format!("#{hex}");

        let (r, g, b) = unpack_rgb(self.color);
        for (channel, value) in Channel::ALL.into_iter().zip([r, g, b]) {
            if source != EditSource::Channel(channel) {
                *self.fields.channel_mut(channel) = value.to_string();
            }
        }

        if source != EditSource::Wheel {
            let (h, s, v) = math::rgb_to_hsv(r, g, b);
            self.wheel.set_hsv(h, s, v);
            self.wheel.draw();
        }
    }

    /// Hex field edited. The field keeps `text` as typed; returns `false`
    /// when it holds no hex digits and the color is left alone.
    pub fn on_hex_input(&mut self, text: &str) -> bool {
        self.fields.hex = text.to_string();
        match parse_hex_field(text) {
            Some(color) => {
                self.update(color, EditSource::Hex);
                true
            }
            None => false,
        }
    }

    /// Channel field edited. The field keeps `text` as typed; returns
    /// `false` when it holds no digits and the color is left alone.
    pub fn on_channel_input(&mut self, channel: Channel, text: &str) -> bool {
        *self.fields.channel_mut(channel) = text.to_string();
        let Some(value) = parse_channel_field(text) else {
            return false;
        };
        let shift = channel.shift();
        let merged = (self.color & !(0xff << shift)) | ((value as u32) << shift);
        self.update(merged, EditSource::Channel(channel));
        true
    }

    /// Pointer pressed on the wheel. Returns whether a drag started.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let slot = self.wheel_updates.clone();
        let started = self.wheel.track(x, y, move |color| slot.set(Some(color)));
        self.apply_wheel_update();
        started
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.wheel.on_drag_move(x, y);
        self.apply_wheel_update();
    }

    pub fn pointer_up(&mut self) {
        self.wheel.on_drag_end();
    }

    fn apply_wheel_update(&mut self) {
        if let Some(color) = self.wheel_updates.take() {
            self.update(color, EditSource::Wheel);
        }
    }

    /// Accept the current color. Returns `false` if no pick is pending.
    pub fn commit(&mut self) -> bool {
        self.resolve(PickOutcome::Chosen(self.color))
    }

    /// Dismiss the panel. Returns `false` if no pick is pending.
    pub fn cancel(&mut self) -> bool {
        self.resolve(PickOutcome::Cancelled)
    }

    fn resolve(&mut self, outcome: PickOutcome) -> bool {
        let Some(done) = self.done.take() else {
            return false;
        };
        self.open = false;
        self.wheel.on_drag_end();
        info!("pick resolved: {outcome:?}");
        // The caller may have dropped the future; nothing is waiting then.
        let _ = done.send(outcome);
        true
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Swatch background, `#rrggbb`.
    pub fn swatch(&self) -> &str {
        &self.swatch
    }

    pub fn wheel(&self) -> &ColorWheel<S> {
        &self.wheel
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::raster::{MemoryCanvas, MemorySurface};

    fn picker() -> Picker<MemorySurface> {
        Picker::new(&mut MemoryCanvas::new(), WheelGeometry::default()).unwrap()
    }

    #[test]
    fn test_new_draws_wheel() {
        let p = picker();
        assert_eq!(p.wheel().surface().flushes(), 1);
        assert!(!p.is_open());
    }

    #[test]
    fn test_pick_fills_controls() {
        let mut p = picker();
        let _pending = p.pick(0x3b82f6);
        assert!(p.is_open());
        assert_eq!(p.fields().hex, "3b82f6");
        assert_eq!(p.fields().red, "59");
        assert_eq!(p.fields().green, "130");
        assert_eq!(p.fields().blue, "246");
        assert_eq!(p.swatch(), "#3b82f6");
        assert_eq!(p.wheel().color(), 0x3b82f6);
    }

    #[test]
    fn test_commit_resolves_chosen() {
        let mut p = picker();
        let pending = p.pick(0x123456);
        assert!(p.on_hex_input("ff8000"));
        assert!(p.commit());
        assert!(!p.is_open());
        assert_eq!(block_on(pending), PickOutcome::Chosen(0xff8000));
    }

    #[test]
    fn test_cancel_resolves_cancelled() {
        let mut p = picker();
        let pending = p.pick(0x123456);
        assert!(p.cancel());
        assert_eq!(block_on(pending), PickOutcome::Cancelled);
    }

    #[test]
    fn test_resolves_once() {
        let mut p = picker();
        let pending = p.pick(0xabcdef);
        assert!(p.commit());
        assert!(!p.commit());
        assert!(!p.cancel());
        assert_eq!(block_on(pending), PickOutcome::Chosen(0xabcdef));
    }

    #[test]
    fn test_commit_without_pick() {
        let mut p = picker();
        assert!(!p.commit());
    }

    #[test]
    fn test_dropped_picker_cancels() {
        let mut p = picker();
        let pending = p.pick(0x00ff00);
        drop(p);
        assert_eq!(block_on(pending), PickOutcome::Cancelled);
    }

    #[test]
    fn test_second_pick_supersedes_first() {
        let mut p = picker();
        let first = p.pick(0x111111);
        let second = p.pick(0x222222);
        assert!(p.commit());
        assert_eq!(block_on(first), PickOutcome::Cancelled);
        assert_eq!(block_on(second), PickOutcome::Chosen(0x222222));
    }

    #[test]
    fn test_hex_edit_keeps_typed_text() {
        let mut p = picker();
        let _pending = p.pick(0);
        assert!(p.on_hex_input("FF8000"));
        assert_eq!(p.fields().hex, "FF8000");
        assert_eq!(p.fields().red, "255");
        assert_eq!(p.fields().green, "128");
        assert_eq!(p.swatch(), "#ff8000");
    }

    #[test]
    fn test_typed_text_stays_with_other_controls_in_sync() {
        let mut p = picker();
        let _pending = p.pick(0);
        assert!(p.on_channel_input(Channel::Red, "12"));
        assert_eq!(p.fields().red, "12");
        assert_eq!(p.color(), 0x0c0000);
        assert_eq!(p.fields().hex, "0c0000");
        assert_eq!(p.swatch(), "#0c0000");

        assert!(p.on_hex_input("ff80"));
        assert_eq!(p.fields().hex, "ff80");
        assert_eq!(p.color(), 0x00ff80);
        assert_eq!(p.fields().red, "0");
        assert_eq!(p.fields().blue, "128");
        assert_eq!(p.wheel().color(), 0x00ff80);

        // text without digits is kept but leaves the color alone
        assert!(!p.on_hex_input("#"));
        assert_eq!(p.fields().hex, "#");
        assert_eq!(p.color(), 0x00ff80);
    }

    #[test]
    fn test_hex_edit_masks() {
        let mut p = picker();
        assert!(p.on_hex_input("1abcdef"));
        assert_eq!(p.color(), 0xabcdef);
        assert!(!p.on_hex_input("xyz"));
        assert_eq!(p.color(), 0xabcdef);
    }

    #[test]
    fn test_channel_edit_masks_and_merges() {
        let mut p = picker();
        let _pending = p.pick(0x102030);
        assert!(p.on_channel_input(Channel::Red, "300"));
        assert_eq!(p.color(), 0x2c2030);
        assert_eq!(p.fields().red, "300");
        assert_eq!(p.fields().hex, "2c2030");
        assert!(p.on_channel_input(Channel::Blue, "255"));
        assert_eq!(p.color(), 0x2c20ff);
        assert!(!p.on_channel_input(Channel::Green, "abc"));
        assert_eq!(p.color(), 0x2c20ff);
    }

    #[test]
    fn test_wheel_drag_updates_fields() {
        let mut p = picker();
        let _pending = p.pick(0xff0000);
        assert!(p.pointer_down(100.0, 100.0));
        assert_eq!(p.color(), 0x7f4040);
        assert_eq!(p.fields().hex, "7f4040");
        assert_eq!(p.fields().red, "127");
        assert_eq!(p.swatch(), "#7f4040");
        // HSV stays as dragged instead of being re-derived from RGB
        let side = p.wheel().geometry().side();
        assert_eq!(p.wheel().hsv().1, 63.0 / side);

        p.pointer_move(1000.0, 1000.0);
        assert_eq!(p.color(), 0);
        p.pointer_up();
        assert!(!p.wheel().is_dragging());
        p.pointer_move(100.0, 100.0);
        assert_eq!(p.color(), 0);
    }

    #[test]
    fn test_pointer_down_outside_wheel() {
        let mut p = picker();
        let _pending = p.pick(0x336699);
        assert!(!p.pointer_down(1.0, 1.0));
        assert_eq!(p.color(), 0x336699);
    }

    #[test]
    fn test_commit_ends_drag() {
        let mut p = picker();
        let pending = p.pick(0xff0000);
        assert!(p.pointer_down(195.0, 100.0));
        assert!(p.commit());
        assert!(!p.wheel().is_dragging());
        assert_eq!(block_on(pending), PickOutcome::Chosen(0xff0000));
    }
}
