//! Standalone demo: opens a window with the picker and logs the outcome.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_colorwheel::{FrameCanvas, PickOutcome, Picker, WheelGeometry, color_picker, to_css};

fn main() {
    env_logger::init();

    let picker = match Picker::new(&mut FrameCanvas, WheelGeometry::default()) {
        Ok(picker) => Rc::new(RefCell::new(picker)),
        Err(e) => {
            log::error!("cannot create picker: {e}");
            return;
        }
    };
    let outcome = picker.borrow_mut().pick(0x3b82f6);

    let view_picker = picker.clone();
    floem::Application::new()
        .window(
            move |_| {
                color_picker(view_picker, floem::quit_app)
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 320.0))
                    .title("floem-colorwheel"),
            ),
        )
        .run();

    // Closing the window without a choice counts as cancelling.
    picker.borrow_mut().cancel();
    match futures::executor::block_on(outcome) {
        PickOutcome::Chosen(color) => log::info!("picked {}", to_css(color)),
        PickOutcome::Cancelled => log::info!("no color picked"),
    }
}
