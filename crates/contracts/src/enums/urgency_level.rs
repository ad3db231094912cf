use serde::{Deserialize, Serialize};

/// Уровень срочности заявки, назначаемый сервером ("Alta" / "Media" / "Baja").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Alta,
    Media,
    Baja,
}

impl UrgencyLevel {
    /// Метка в том виде, в котором её отдаёт API
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyLevel::Alta => "Alta",
            UrgencyLevel::Media => "Media",
            UrgencyLevel::Baja => "Baja",
        }
    }

    /// Все уровни в порядке убывания срочности
    pub fn all() -> Vec<UrgencyLevel> {
        vec![UrgencyLevel::Alta, UrgencyLevel::Media, UrgencyLevel::Baja]
    }

    /// Парсинг метки API (без учёта регистра и пробелов по краям)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
