use super::error::ApiError;

/// Состояние загрузки страницы: idle → loading → loaded | failed
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Результат запроса. Ошибка вытесняет ранее загруженные данные.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(err) => LoadState::Failed(err.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_drops_data() {
        let state: LoadState<Vec<u32>> = LoadState::from_result(Err(ApiError::Status(404)));
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), Some("La solicitud falló con el código 404."));
    }

    #[test]
    fn test_loaded() {
        let state = LoadState::from_result(Ok(vec![1, 2]));
        assert_eq!(state.data(), Some(&vec![1, 2]));
        assert!(!state.is_loading());
        assert!(LoadState::<()>::default() == LoadState::Idle);
    }
}
