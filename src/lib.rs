// ============================================================================
// DAISY PORTAL - Portal de miembros (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que renderizan DOM
// - Services: SOLO comunicación API
// - Stores: estado de sesión con Rc<RefCell> + persistencia en localStorage
// - Router: History API + guard global de navegación
// ============================================================================

pub mod app;
pub mod dom;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod stores;
pub mod utils;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;

// Instancia global de la app (WASM corre en un solo hilo)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Daisy Portal - Rust puro + WASM");

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // El evento "loggedIn" fuerza un re-render global.
    // Listener global: se registra UNA sola vez acá.
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("🔄 Evento loggedIn recibido, re-renderizando");
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback("loggedIn", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ App no inicializada todavía");
        }
    });
}

/// Disparar el evento global "loggedIn" (lo captura el listener de main)
pub fn notify_logged_in() {
    if let Some(win) = web_sys::window() {
        if let Ok(event) = web_sys::Event::new("loggedIn") {
            let _ = win.dispatch_event(&event);
        }
    }
}
