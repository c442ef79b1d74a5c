#![allow(dead_code)]

use ao_gym::core::{Amount, Event, Notifier, Offering, RenderLine, Renderer};
use ao_gym::StaticCatalog;
use std::cell::RefCell;
use std::rc::Rc;

/// Renderer/notifier double that shares its log with the test body.
#[derive(Clone, Default)]
pub struct Recorder {
    pub renders: Rc<RefCell<Vec<(Vec<RenderLine>, Amount)>>>,
    pub emptied: Rc<RefCell<usize>>,
    pub events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn last_total(&self) -> Option<Amount> {
        self.renders.borrow().last().map(|(_, total)| *total)
    }

    pub fn render_count(&self) -> usize {
        self.renders.borrow().len()
    }

    pub fn emptied_count(&self) -> usize {
        *self.emptied.borrow()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl Renderer for Recorder {
    fn render(&mut self, lines: &[RenderLine], total: Amount) {
        self.renders.borrow_mut().push((lines.to_vec(), total));
    }

    fn queue_emptied(&mut self) {
        *self.emptied.borrow_mut() += 1;
    }
}

impl Notifier for Recorder {
    fn notify(&mut self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}

pub fn two_program_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        Offering::new(1, "Strength", 45).with_category("strength"),
        Offering::new(2, "Yoga", 40).with_category("yoga"),
    ])
}
