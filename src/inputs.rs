//! Text fields and buttons for the picker panel.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::color_wheel::{FrameSurface, SharedPicker};
use crate::constants;
use crate::picker::{Channel, Fields, Picker};

/// A text field mirroring one of the picker's [`Fields`].
///
/// Every keystroke is handed to `write`; the picker decides what the text
/// means. The field is refreshed from the picker whenever `revision` bumps.
fn field_input(
    picker: SharedPicker,
    revision: RwSignal<u64>,
    read: impl Fn(&Fields) -> String + Clone + 'static,
    write: impl Fn(&mut Picker<FrameSurface>, &str) -> bool + 'static,
    width: f32,
) -> impl IntoView {
    let text = RwSignal::new(read(picker.borrow().fields()));

    // Picker → text (only update if not equivalent)
    let source = picker.clone();
    let reader = read.clone();
    create_effect(move |_| {
        revision.get();
        let current = reader(source.borrow().fields());
        if text.get_untracked() != current {
            text.set(current);
        }
    });

    // Text → picker on every keystroke
    create_effect(move |_| {
        let raw = text.get();
        let changed = {
            let mut p = picker.borrow_mut();
            read(p.fields()) != raw && write(&mut *p, &raw)
        };
        if changed {
            revision.update(|r| *r += 1);
        }
    });

    text_input(text).style(move |s| {
        s.width(width)
            .padding(2.0)
            .font_size(constants::INPUT_FONT)
            .font_family("monospace".to_string())
            .background(Color::WHITE)
            .border(1.0)
            .border_color(Color::rgb8(200, 200, 200))
            .border_radius(3.0)
    })
}

/// Hex field, six digits without `#`.
pub(crate) fn hex_input(picker: SharedPicker, revision: RwSignal<u64>) -> impl IntoView {
    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        field_input(
            picker,
            revision,
            |f: &Fields| f.hex.clone(),
            |p: &mut Picker<FrameSurface>, raw: &str| p.on_hex_input(raw),
            constants::HEX_INPUT_WIDTH,
        ),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// Decimal 0–255 field for one channel, labelled `R:`, `G:` or `B:`.
pub(crate) fn channel_input(
    channel: Channel,
    picker: SharedPicker,
    revision: RwSignal<u64>,
) -> impl IntoView {
    let lbl = match channel {
        Channel::Red => "R:",
        Channel::Green => "G:",
        Channel::Blue => "B:",
    };
    h_stack((
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        field_input(
            picker,
            revision,
            move |f: &Fields| f.channel(channel).to_string(),
            move |p: &mut Picker<FrameSurface>, raw: &str| p.on_channel_input(channel, raw),
            constants::INPUT_WIDTH,
        ),
    ))
    .style(|s| s.items_center().gap(2.0))
}

/// A plain text button that runs `on_press` on release.
pub(crate) fn dialog_button(text: &'static str, on_press: impl Fn() + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(label(move || text).style(move |s| {
        let c = if pressed.get() {
            Color::rgb8(80, 80, 80)
        } else {
            Color::rgb8(40, 40, 40)
        };
        s.font_size(constants::INPUT_FONT).color(c)
    }))
    .style(|s| {
        s.padding_horiz(10.0)
            .padding_vert(3.0)
            .items_center()
            .justify_center()
            .border(1.0)
            .border_color(Color::rgb8(200, 200, 200))
            .border_radius(constants::RADIUS)
            .background(Color::WHITE)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}
