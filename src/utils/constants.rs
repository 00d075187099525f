/// URL base del backend de miembros
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000 (por defecto)
/// - Producción: via API_BASE_URL env var
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Prefijo bajo el que se sirve la app
pub const BASE_PATH: &str = "/daisy/";

/// Claves de localStorage (mismos nombres que usa la web existente)
pub const STORAGE_KEY_IS_LOGGED_IN: &str = "isLoggedIn";
pub const STORAGE_KEY_MEMBER_INFO: &str = "memberInfo";

/// Timeout del request de login en ms; pasado este plazo se aborta el fetch
pub const LOGIN_TIMEOUT_MS: u32 = 10_000;
