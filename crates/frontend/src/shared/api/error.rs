use serde::Deserialize;
use thiserror::Error;

/// Ошибка обращения к API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Сетевой сбой: запрос не дошёл или ответ не получен
    #[error("network error: {0}")]
    Network(String),

    /// Не-2xx ответ с сообщением от сервера
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// Не-2xx ответ без пригодного сообщения
    #[error("request failed with status code {0}")]
    Status(u16),

    /// Не задан обязательный параметр маршрута
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    /// 403: операция отклонена бизнес-правилом или правами
    #[error("rejected by the server (403): {message}")]
    Forbidden { message: String },

    /// Тело ответа не соответствует ожидаемой схеме
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Запрос отменён более новым запросом или закрытием страницы
    #[error("request cancelled")]
    Cancelled,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Разбирает не-2xx ответ: поле `message` из JSON-тела, если оно есть
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        match (status, message) {
            (403, message) => ApiError::Forbidden {
                message: message.unwrap_or_default(),
            },
            (status, Some(message)) => ApiError::Server { status, message },
            (status, None) => ApiError::Status(status),
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden { .. })
    }

    /// Текст для пользователя
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "No se pudo conectar con el servidor.".to_string(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Status(status) => format!("La solicitud falló con el código {status}."),
            ApiError::MissingParameter("ordenId") => "No se proporcionó un ID de orden.".to_string(),
            ApiError::MissingParameter(name) => format!("Falta el parámetro requerido: {name}."),
            ApiError::Forbidden { message } if !message.is_empty() => message.clone(),
            ApiError::Forbidden { .. } => {
                "La operación fue rechazada por el servidor.".to_string()
            }
            ApiError::Malformed(_) => "El servidor devolvió una respuesta inesperada.".to_string(),
            ApiError::Cancelled => "La solicitud fue cancelada.".to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Malformed(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_extracted() {
        let err = ApiError::from_response(404, r#"{"message":"Orden no encontrada"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                message: "Orden no encontrada".into()
            }
        );
        assert_eq!(err.user_message(), "Orden no encontrada");
    }

    #[test]
    fn test_status_without_message() {
        assert_eq!(ApiError::from_response(500, ""), ApiError::Status(500));
        assert_eq!(ApiError::from_response(502, "<html>"), ApiError::Status(502));
        assert_eq!(
            ApiError::from_response(400, r#"{"message":"  "}"#),
            ApiError::Status(400)
        );
        assert_eq!(
            ApiError::Status(500).user_message(),
            "La solicitud falló con el código 500."
        );
    }

    #[test]
    fn test_forbidden_is_distinct() {
        let err = ApiError::from_response(403, r#"{"message":"Orden ya asignada"}"#);
        assert!(err.is_forbidden());
        assert_eq!(err.user_message(), "Orden ya asignada");

        let bare = ApiError::from_response(403, "");
        assert!(bare.is_forbidden());
        assert_eq!(bare.user_message(), "La operación fue rechazada por el servidor.");
    }

    #[test]
    fn test_missing_order_id_message() {
        assert_eq!(
            ApiError::MissingParameter("ordenId").user_message(),
            "No se proporcionó un ID de orden."
        );
    }
}
