use crate::input::closes_menu;
use crate::listener::EventListener;
use crate::overlay::SideMenu;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape closes the side menu.
pub fn wire_menu_keys(window: &web::Window, menu: &Rc<RefCell<SideMenu>>) -> EventListener {
    let weak = Rc::downgrade(menu);
    EventListener::new(window.as_ref(), "keydown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if !closes_menu(&ev.key()) {
            return;
        }
        if let Some(m) = weak.upgrade() {
            let mut m = m.borrow_mut();
            if m.is_open() {
                m.hide();
            }
        }
    })
}
