//! Floem host for the color wheel.
//!
//! [`FrameSurface`] turns each flushed frame into a `peniko::Image`, and
//! [`WheelView`] paints that image at 1:1 and feeds pointer events to the
//! picker's drag tracking.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob};

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{EventCx, PaintCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::picker::Picker;
use crate::raster::{Canvas, Raster, Surface};

pub type SharedPicker = Rc<RefCell<Picker<FrameSurface>>>;

/// Surface holding the latest frame as a paintable image.
#[derive(Default)]
pub struct FrameSurface {
    image: Option<peniko::Image>,
    hash: Vec<u8>,
}

impl FrameSurface {
    pub fn image(&self) -> Option<&peniko::Image> {
        self.image.as_ref()
    }
}

impl Surface for FrameSurface {
    fn put_image(&mut self, image: &Raster) {
        let blob = Blob::new(Arc::new(image.data().to_vec()));
        self.hash = blob.id().to_le_bytes().to_vec();
        self.image = Some(peniko::Image::new(
            blob,
            peniko::Format::Rgba8,
            image.width(),
            image.height(),
        ));
    }
}

/// Canvas backed by the Floem renderer; always provides a surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCanvas;

impl Canvas for FrameCanvas {
    type Surface = FrameSurface;

    fn context_2d(&mut self) -> Option<FrameSurface> {
        Some(FrameSurface::default())
    }
}

pub(crate) struct WheelView {
    id: ViewId,
    held: bool,
    picker: SharedPicker,
    /// Bumped after every picker change so dependent views refresh.
    revision: RwSignal<u64>,
}

/// Creates the wheel view, sized to the wheel raster.
pub(crate) fn wheel_view(picker: SharedPicker, revision: RwSignal<u64>) -> WheelView {
    let id = ViewId::new();
    let size = picker.borrow().wheel().geometry().size as f32;

    // Field edits redraw the wheel outside this view.
    create_effect(move |_| {
        revision.get();
        id.request_layout();
    });

    WheelView {
        id,
        held: false,
        picker,
        revision,
    }
    .style(move |s| {
        s.width(size)
            .height(size)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl WheelView {
    fn changed(&self) {
        self.revision.update(|r| *r += 1);
        self.id.request_layout();
    }

    fn release(&mut self) {
        if self.held {
            self.held = false;
            self.picker.borrow_mut().pointer_up();
        }
    }
}

impl View for WheelView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let started = self.picker.borrow_mut().pointer_down(e.pos.x, e.pos.y);
                if started {
                    cx.update_active(self.id());
                    self.held = true;
                    self.changed();
                }
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.picker.borrow_mut().pointer_move(e.pos.x, e.pos.y);
                    self.changed();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.release();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let picker = self.picker.borrow();
        let wheel = picker.wheel();
        let size = wheel.geometry().size as f64;
        let surface = wheel.surface();
        if let Some(img) = surface.image() {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &surface.hash,
                },
                Rect::new(0.0, 0.0, size, size),
            );
        }
    }
}
