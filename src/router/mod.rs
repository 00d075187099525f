// ============================================================================
// ROUTER - Tabla de rutas + guard global de navegación
// ============================================================================
// Cada transición (navigate, back/forward, carga inicial) pasa por resolve():
// si la ruta destino exige sesión y no hay login, se redirige a "/".
// La lista pública es un match literal sobre el path, no por prefijo.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::stores::AuthStore;
use crate::utils::BASE_PATH;

/// Rutas con nombre de la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    CurrentOrders,
    OrderHistory,
    My,
}

/// Rutas públicas. Cualquier ruta pública nueva debe agregarse acá
/// explícitamente.
const PUBLIC_PATHS: &[&str] = &["/"];

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::CurrentOrders => "/orders/current",
            Route::OrderHistory => "/orders/history",
            Route::My => "/my",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::CurrentOrders => "current-orders",
            Route::OrderHistory => "order-history",
            Route::My => "my",
        }
    }

    /// Parsear un path sin base. Paths desconocidos caen en Home.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/orders/current" => Route::CurrentOrders,
            "/orders/history" => Route::OrderHistory,
            "/my" => Route::My,
            _ => Route::Home,
        }
    }
}

/// ¿La ruta destino exige sesión?
fn auth_required(target: Route) -> bool {
    !PUBLIC_PATHS.contains(&target.path())
}

/// Guard de navegación: síncrono, se re-evalúa en CADA transición, nunca
/// falla. O deja pasar la ruta destino o la reemplaza por Home.
pub fn resolve(target: Route, logged_in: bool) -> Route {
    if auth_required(target) && !logged_in {
        Route::Home
    } else {
        target
    }
}

/// Router sobre la History API con guard global pre-navegación.
#[derive(Clone)]
pub struct Router {
    current: Rc<RefCell<Route>>,
    auth: AuthStore,
}

impl Router {
    pub fn new(auth: AuthStore) -> Self {
        Self {
            current: Rc::new(RefCell::new(Route::Home)),
            auth,
        }
    }

    pub fn current(&self) -> Route {
        *self.current.borrow()
    }

    /// Resolver la URL del navegador al arrancar y registrar el listener de
    /// popstate para back/forward.
    pub fn init(&self) -> Result<(), JsValue> {
        let initial = Route::from_path(&strip_base(&location_pathname()?));
        let resolved = resolve(initial, self.auth.is_logged_in());
        if resolved != initial {
            log::info!(
                "🛡️ Ruta {} requiere sesión, redirigiendo a {}",
                initial.path(),
                resolved.path()
            );
            self.replace(resolved)?;
        } else {
            *self.current.borrow_mut() = resolved;
        }

        // back/forward pasan por el mismo guard que una navegación normal.
        // Listener global: se registra UNA sola vez acá.
        {
            let router = self.clone();
            let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
                if let Err(e) = router.handle_popstate() {
                    log::error!("❌ Error en popstate: {:?}", e);
                }
                crate::rerender_app();
            }) as Box<dyn FnMut(web_sys::PopStateEvent)>);
            web_sys::window()
                .ok_or_else(|| JsValue::from_str("No window"))?
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// Navegar aplicando el guard; pushState + re-render.
    pub fn navigate(&self, target: Route) {
        let resolved = resolve(target, self.auth.is_logged_in());
        if resolved != target {
            log::info!(
                "🛡️ Ruta {} requiere sesión, redirigiendo a {}",
                target.path(),
                resolved.path()
            );
        }
        if let Err(e) = self.push(resolved) {
            log::error!("❌ Error navegando a {}: {:?}", resolved.path(), e);
        }
        crate::rerender_app();
    }

    /// Redirección post-logout; la dispara la señal session-cleared del store.
    pub fn redirect_home(&self) {
        if let Err(e) = self.push(Route::Home) {
            log::error!("❌ Error redirigiendo a home: {:?}", e);
        }
        crate::rerender_app();
    }

    fn handle_popstate(&self) -> Result<(), JsValue> {
        let target = Route::from_path(&strip_base(&location_pathname()?));
        let resolved = resolve(target, self.auth.is_logged_in());
        if resolved != target {
            log::info!(
                "🛡️ Ruta {} requiere sesión, redirigiendo a {}",
                target.path(),
                resolved.path()
            );
            // replaceState para no ensuciar el historial con la redirección
            self.replace(resolved)?;
        } else {
            *self.current.borrow_mut() = resolved;
        }
        Ok(())
    }

    fn push(&self, route: Route) -> Result<(), JsValue> {
        let url = full_path(route);
        history()?.push_state_with_url(&JsValue::NULL, "", Some(url.as_str()))?;
        *self.current.borrow_mut() = route;
        Ok(())
    }

    fn replace(&self, route: Route) -> Result<(), JsValue> {
        let url = full_path(route);
        history()?.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()))?;
        *self.current.borrow_mut() = route;
        Ok(())
    }
}

fn history() -> Result<web_sys::History, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()
}

fn location_pathname() -> Result<String, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .pathname()
}

/// Quitar el prefijo BASE_PATH del pathname del navegador
fn strip_base(pathname: &str) -> String {
    let base = BASE_PATH.trim_end_matches('/');
    let stripped = pathname.strip_prefix(base).unwrap_or(pathname);
    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

/// Path completo (con base) para pushState/replaceState
fn full_path(route: Route) -> String {
    format!("{}{}", BASE_PATH.trim_end_matches('/'), route.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROUTES: [Route; 4] = [
        Route::Home,
        Route::CurrentOrders,
        Route::OrderHistory,
        Route::My,
    ];

    #[test]
    fn paths_parse_back_to_their_route() {
        for route in ALL_ROUTES {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn route_names_match_the_table() {
        assert_eq!(Route::Home.name(), "home");
        assert_eq!(Route::CurrentOrders.name(), "current-orders");
        assert_eq!(Route::OrderHistory.name(), "order-history");
        assert_eq!(Route::My.name(), "my");
    }

    #[test]
    fn unknown_path_falls_back_to_home() {
        assert_eq!(Route::from_path("/nope"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn public_match_is_literal_not_prefix() {
        // "/my" empieza igual que "/", pero solo "/" es pública
        assert_eq!(resolve(Route::My, false), Route::Home);
    }

    #[test]
    fn guard_redirects_protected_routes_when_logged_out() {
        assert_eq!(resolve(Route::CurrentOrders, false), Route::Home);
        assert_eq!(resolve(Route::OrderHistory, false), Route::Home);
        assert_eq!(resolve(Route::My, false), Route::Home);
    }

    #[test]
    fn home_is_always_allowed() {
        assert_eq!(resolve(Route::Home, false), Route::Home);
        assert_eq!(resolve(Route::Home, true), Route::Home);
    }

    #[test]
    fn guard_passes_everything_when_logged_in() {
        for route in ALL_ROUTES {
            assert_eq!(resolve(route, true), route);
        }
    }

    #[test]
    fn strip_base_handles_app_prefix() {
        assert_eq!(strip_base("/daisy/orders/current"), "/orders/current");
        assert_eq!(strip_base("/daisy/"), "/");
        assert_eq!(strip_base("/daisy"), "/");
        // Sin prefijo (p.ej. dev server en raíz) el path queda igual
        assert_eq!(strip_base("/my"), "/my");
    }

    #[test]
    fn full_path_re_adds_the_prefix() {
        assert_eq!(full_path(Route::Home), "/daisy/");
        assert_eq!(full_path(Route::CurrentOrders), "/daisy/orders/current");
    }
}
