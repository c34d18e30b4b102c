//! Keyboard input handling

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use game_core::Keyboard;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

/// Key names compare case-insensitively, so Shift or Caps Lock
/// doesn't change which paddle moves
fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Set of keys currently held, fed by document listeners
pub struct BrowserInput {
    held: Rc<RefCell<HashSet<String>>>,
    _listeners: Vec<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl BrowserInput {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let held = Rc::new(RefCell::new(HashSet::new()));

        let on_down = {
            let held = held.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                held.borrow_mut().insert(normalize_key(&event.key()));
            })
        };
        document.add_event_listener_with_callback("keydown", on_down.as_ref().unchecked_ref())?;

        let on_up = {
            let held = held.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                held.borrow_mut().remove(&normalize_key(&event.key()));
            })
        };
        document.add_event_listener_with_callback("keyup", on_up.as_ref().unchecked_ref())?;

        Ok(Self {
            held,
            _listeners: vec![on_down, on_up],
        })
    }
}

impl Keyboard for BrowserInput {
    fn key_down(&self, name: &str) -> bool {
        self.held.borrow().contains(&normalize_key(name))
    }
}
