use serde::{Deserialize, Serialize};

/// Рабочий статус заявки, который техник выставляет на странице деталей.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Nuevo,
    EnCurso,
    Pausado,
    Finalizado,
    Cerrado,
}

impl WorkStatus {
    /// Код статуса для API
    pub fn code(&self) -> &'static str {
        match self {
            WorkStatus::Nuevo => "nuevo",
            WorkStatus::EnCurso => "en_curso",
            WorkStatus::Pausado => "pausado",
            WorkStatus::Finalizado => "finalizado",
            WorkStatus::Cerrado => "cerrado",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkStatus::Nuevo => "Nuevo",
            WorkStatus::EnCurso => "En curso",
            WorkStatus::Pausado => "Pausado",
            WorkStatus::Finalizado => "Finalizado",
            WorkStatus::Cerrado => "Cerrado",
        }
    }

    /// Все статусы в порядке жизненного цикла заявки
    pub fn all() -> Vec<WorkStatus> {
        vec![
            WorkStatus::Nuevo,
            WorkStatus::EnCurso,
            WorkStatus::Pausado,
            WorkStatus::Finalizado,
            WorkStatus::Cerrado,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "nuevo" => Some(WorkStatus::Nuevo),
            "en_curso" => Some(WorkStatus::EnCurso),
            "pausado" => Some(WorkStatus::Pausado),
            "finalizado" => Some(WorkStatus::Finalizado),
            "cerrado" => Some(WorkStatus::Cerrado),
            _ => None,
        }
    }
}

impl Default for WorkStatus {
    fn default() -> Self {
        WorkStatus::Nuevo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_covers_every_status() {
        for status in WorkStatus::all() {
            assert_eq!(WorkStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(WorkStatus::from_code("cancelado"), None);
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&WorkStatus::EnCurso).unwrap();
        assert_eq!(json, "\"en_curso\"");
    }
}
