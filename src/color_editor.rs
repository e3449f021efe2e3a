//! Picker panel: the wheel above a swatch, hex and R/G/B fields, and
//! Okay/Cancel buttons.

use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::color::unpack_rgb;
use crate::color_wheel::{SharedPicker, wheel_view};
use crate::constants;
use crate::inputs::{channel_input, dialog_button, hex_input};
use crate::picker::Channel;

/// Creates the panel. `on_close` runs after Okay or Cancel resolves the pick.
pub(crate) fn color_editor(picker: SharedPicker, on_close: impl Fn() + 'static) -> impl IntoView {
    let revision = RwSignal::new(0u64);
    let on_close: Rc<dyn Fn()> = Rc::new(on_close);

    let swatch_source = picker.clone();
    let swatch = empty().style(move |st| {
        revision.get();
        let (r, g, b) = unpack_rgb(swatch_source.borrow().color());
        st.width(constants::SWATCH_SIZE)
            .height(constants::SWATCH_SIZE)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(180, 180, 180))
            .background(Color::rgb8(r, g, b))
    });

    let okay = {
        let picker = picker.clone();
        let on_close = on_close.clone();
        dialog_button("Okay", move || {
            let committed = picker.borrow_mut().commit();
            if committed {
                on_close();
            }
        })
    };
    let cancel = {
        let picker = picker.clone();
        dialog_button("Cancel", move || {
            let cancelled = picker.borrow_mut().cancel();
            if cancelled {
                on_close();
            }
        })
    };

    v_stack((
        wheel_view(picker.clone(), revision),
        h_stack((swatch, hex_input(picker.clone(), revision)))
            .style(|st| st.gap(constants::GAP).items_center()),
        h_stack((
            channel_input(Channel::Red, picker.clone(), revision),
            channel_input(Channel::Green, picker.clone(), revision),
            channel_input(Channel::Blue, picker, revision),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center()),
        h_stack((okay, cancel)).style(|st| st.gap(constants::GAP).justify_center()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .background(Color::rgb8(242, 242, 242))
    })
}
