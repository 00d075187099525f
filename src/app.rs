// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::Router;
use crate::services::ApiClient;
use crate::stores::AuthStore;
use crate::views::render_app;

/// Estado compartido: store de sesión + router. Se construye una vez en
/// App::new() y se comparte clonando (todo es Rc por dentro).
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthStore,
    pub router: Router,
}

impl AppState {
    /// Construcción explícita: hidrata la sesión desde storage, resuelve la
    /// ruta inicial y conecta la señal session-cleared con la redirección.
    pub fn new() -> Result<Self, JsValue> {
        let auth = AuthStore::new(ApiClient::new());
        auth.hydrate();

        let router = Router::new(auth.clone());
        router.init()?;

        // El store no conoce al router: la capa de routing se suscribe
        {
            let router = router.clone();
            auth.on_session_cleared(move || {
                router.redirect_home();
            });
        }

        Ok(Self { auth, router })
    }
}

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;
        let state = AppState::new()?;
        Ok(Self { state, root })
    }

    /// Re-render completo de la vista actual
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
