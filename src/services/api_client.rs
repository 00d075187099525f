// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::AbortController;

use crate::error::SessionError;
use crate::models::MemberProfile;
use crate::utils::{API_BASE_URL, LOGIN_TIMEOUT_MS};

/// Body de error opcional del backend: { "message": "..." }
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Consultar el perfil asociado a una license.
    /// La license va en el path y además como credencial de query, igual que
    /// en la web existente.
    pub async fn member_info(&self, license: &str) -> Result<MemberProfile, SessionError> {
        let encoded: String = js_sys::encode_uri_component(license).into();
        let url = format!(
            "{}/member/info/{}?licence_key={}",
            self.base_url, license, encoded
        );

        log::info!("🔐 Validando license contra {}", self.base_url);

        // El fetch no tiene timeout propio: lo acotamos abortando el request
        let controller = AbortController::new()
            .map_err(|_| SessionError::transport("登录请求失败。"))?;
        let signal = controller.signal();
        let abort_timer = Timeout::new(LOGIN_TIMEOUT_MS, move || {
            log::warn!("⏰ Sin respuesta tras {}ms, abortando login", LOGIN_TIMEOUT_MS);
            controller.abort();
        });

        let result = Request::get(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(&signal))
            .send()
            .await;

        // Con respuesta (o error) el timer ya no hace falta; Drop lo cancela
        drop(abort_timer);

        let response = result.map_err(|e| SessionError::transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            log::error!("❌ License rechazada por el backend (HTTP {})", status);
            return Err(SessionError::server_rejection(status, message));
        }

        response
            .json::<MemberProfile>()
            .await
            .map_err(|e| SessionError::transport(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
