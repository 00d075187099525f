// ============================================================================
// AUTH STORE - Fuente única de verdad del estado de sesión
// ============================================================================
// Se construye explícitamente en AppState::new() y se comparte clonando
// (los campos son Rc<RefCell>). No conoce al router: al cerrar sesión emite
// una señal y la capa de routing se suscribe para redirigir.
//
// Invariantes:
// - is_logged_in == true  => member_info presente (del último login exitoso)
// - is_logged_in == false => member_info ausente
// - localStorage refleja el estado en memoria tras cada mutación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SessionError;
use crate::models::MemberProfile;
use crate::services::ApiClient;
use crate::utils::{
    load_from_storage, load_raw, remove_from_storage, save_raw, save_to_storage,
    STORAGE_KEY_IS_LOGGED_IN, STORAGE_KEY_MEMBER_INFO,
};

/// Una license utilizable es no-vacía después de recortar espacios
fn normalize_license(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[derive(Clone)]
pub struct AuthStore {
    api: ApiClient,
    is_logged_in: Rc<RefCell<bool>>,
    member_info: Rc<RefCell<Option<MemberProfile>>>,
    login_in_flight: Rc<RefCell<bool>>,
    cleared_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AuthStore {
    /// Crear store vacío (logged out). Llamar a hydrate() para restaurar
    /// la sesión guardada.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            is_logged_in: Rc::new(RefCell::new(false)),
            member_info: Rc::new(RefCell::new(None)),
            login_in_flight: Rc::new(RefCell::new(false)),
            cleared_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Rehidratar desde localStorage. Nunca falla: cualquier valor ausente o
    /// corrupto degrada a logged-out sin perfil.
    pub fn hydrate(&self) {
        let flag = load_raw(STORAGE_KEY_IS_LOGGED_IN).as_deref() == Some("true");
        let profile = load_from_storage::<MemberProfile>(STORAGE_KEY_MEMBER_INFO);

        match (flag, profile) {
            (true, Some(profile)) => {
                log::info!("💾 Sesión restaurada desde storage: {}", profile.member_name);
                *self.is_logged_in.borrow_mut() = true;
                *self.member_info.borrow_mut() = Some(profile);
            }
            (true, None) => {
                // Flag sin perfil parseable: estado inconsistente, descartar
                log::warn!("⚠️ isLoggedIn presente pero memberInfo inválido, sesión descartada");
                self.clear_session();
            }
            _ => {
                log::info!("ℹ️ Sin sesión guardada");
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        *self.is_logged_in.borrow()
    }

    pub fn member_info(&self) -> Option<MemberProfile> {
        self.member_info.borrow().clone()
    }

    /// Mutar el perfil en memoria (la vista de perfil edita campos sueltos).
    /// Persistir después con persist_member_info(). No-op sin sesión.
    pub fn update_member_info<F>(&self, mutator: F)
    where
        F: FnOnce(&mut MemberProfile),
    {
        if let Some(profile) = self.member_info.borrow_mut().as_mut() {
            mutator(profile);
        }
    }

    /// Validar la license contra el backend y abrir sesión.
    ///
    /// Cualquier fallo (validación, rechazo del servidor, transporte) deja el
    /// store limpio: logged-out, sin perfil, ambas claves borradas del storage.
    pub async fn login(&self, license: &str) -> Result<(), SessionError> {
        if *self.login_in_flight.borrow() {
            log::warn!("⚠️ Login ya en curso, segunda llamada rechazada");
            return Err(SessionError::LoginInFlight);
        }

        let license = match normalize_license(license) {
            Some(license) => license.to_string(),
            None => {
                self.clear_session();
                return Err(SessionError::Validation);
            }
        };

        *self.login_in_flight.borrow_mut() = true;
        let result = self.api.member_info(&license).await;
        *self.login_in_flight.borrow_mut() = false;

        match result {
            Ok(profile) => {
                log::info!("✅ Login exitoso: {}", profile.member_name);
                *self.is_logged_in.borrow_mut() = true;
                *self.member_info.borrow_mut() = Some(profile.clone());
                // Write-through: el storage refleja el estado en memoria
                if let Err(e) = save_to_storage(STORAGE_KEY_MEMBER_INFO, &profile) {
                    log::error!("❌ Error persistiendo memberInfo: {}", e);
                }
                if let Err(e) = save_raw(STORAGE_KEY_IS_LOGGED_IN, "true") {
                    log::error!("❌ Error persistiendo isLoggedIn: {}", e);
                }
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Login fallido: {}", e);
                self.clear_session();
                Err(e)
            }
        }
    }

    /// Cerrar sesión. Idempotente: limpia memoria + storage y notifica a los
    /// suscriptores (el router redirige a "/"). Nunca falla.
    pub fn logout(&self) {
        log::info!("👋 Logout");
        self.clear_session();
        self.notify_session_cleared();
    }

    /// Re-serializar el perfil actual a storage; no-op si no hay perfil.
    pub fn persist_member_info(&self) {
        if let Some(profile) = self.member_info.borrow().as_ref() {
            if let Err(e) = save_to_storage(STORAGE_KEY_MEMBER_INFO, profile) {
                log::error!("❌ Error persistiendo memberInfo: {}", e);
            } else {
                log::info!("💾 memberInfo persistido");
            }
        }
    }

    /// Suscribirse a la señal de sesión cerrada
    pub fn on_session_cleared<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.cleared_subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify_session_cleared(&self) {
        // Clonar antes de iterar: un callback puede volver a tocar el store
        let subscribers: Vec<_> = self.cleared_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }

    fn clear_session(&self) {
        *self.is_logged_in.borrow_mut() = false;
        *self.member_info.borrow_mut() = None;
        let _ = remove_from_storage(STORAGE_KEY_IS_LOGGED_IN);
        let _ = remove_from_storage(STORAGE_KEY_MEMBER_INFO);
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_license;

    #[test]
    fn empty_license_is_rejected() {
        assert_eq!(normalize_license(""), None);
    }

    #[test]
    fn blank_license_is_rejected() {
        assert_eq!(normalize_license("   "), None);
    }

    #[test]
    fn license_is_trimmed() {
        assert_eq!(normalize_license(" ABC-123 "), Some("ABC-123"));
    }
}
