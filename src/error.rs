// ============================================================================
// SESSION ERROR - Taxonomía de errores del flujo de login
// ============================================================================
// Los callers ramifican por variante, no por contenido del mensaje.
// Los mensajes Display son los que ve el usuario final (en chino, como el
// resto de la UI).
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// License vacía o solo espacios; no se hace ningún request
    #[error("请输入有效的 License。")]
    Validation,

    /// El backend rechazó la license (status fuera de 200-299)
    #[error("{message}")]
    ServerRejection { status: u16, message: String },

    /// Fallo de red o respuesta no parseable
    #[error("{0}")]
    Transport(String),

    /// Ya hay un login en curso; la segunda llamada se rechaza sin tocar estado
    #[error("登录请求进行中，请稍候。")]
    LoginInFlight,
}

impl SessionError {
    /// Rechazo del servidor: usa el message del body si vino, si no el
    /// genérico con el status code
    pub fn server_rejection(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("License 校验失败 (状态码: {})", status));
        SessionError::ServerRejection { status, message }
    }

    /// Error de transporte: usa el detalle del error subyacente si lo hay
    pub fn transport(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if detail.trim().is_empty() {
            SessionError::Transport("登录请求失败。".to_string())
        } else {
            SessionError::Transport(detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_fixed() {
        assert_eq!(SessionError::Validation.to_string(), "请输入有效的 License。");
    }

    #[test]
    fn server_rejection_prefers_backend_message() {
        let err = SessionError::server_rejection(401, Some("invalid license".to_string()));
        assert_eq!(err.to_string(), "invalid license");
        assert_eq!(
            err,
            SessionError::ServerRejection {
                status: 401,
                message: "invalid license".to_string()
            }
        );
    }

    #[test]
    fn server_rejection_without_body_carries_status() {
        let err = SessionError::server_rejection(500, None);
        assert_eq!(err.to_string(), "License 校验失败 (状态码: 500)");
    }

    #[test]
    fn server_rejection_ignores_blank_message() {
        let err = SessionError::server_rejection(502, Some("   ".to_string()));
        assert_eq!(err.to_string(), "License 校验失败 (状态码: 502)");
    }

    #[test]
    fn transport_falls_back_to_generic_message() {
        assert_eq!(
            SessionError::transport("").to_string(),
            "登录请求失败。"
        );
        assert_eq!(
            SessionError::transport("fetch aborted").to_string(),
            "fetch aborted"
        );
    }
}
