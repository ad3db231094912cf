use std::collections::BTreeSet;

/// Режим выбора строк
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    Disabled,
    /// Не более одной строки (действие требует ровно одну цель)
    Single,
    Multi,
}

impl SelectionMode {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, SelectionMode::Disabled)
    }
}

/// Применяет переключение одной строки к набору выбранных id.
///
/// В режиме `Single` выбор новой строки сначала очищает прежний выбор,
/// поэтому две выбранные строки одновременно невозможны.
pub fn toggle(selected: &mut BTreeSet<String>, mode: SelectionMode, id: &str, value: bool) {
    match (mode, value) {
        (SelectionMode::Disabled, _) => {}
        (_, false) => {
            selected.remove(id);
        }
        (SelectionMode::Single, true) => {
            selected.clear();
            selected.insert(id.to_string());
        }
        (SelectionMode::Multi, true) => {
            selected.insert(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode_never_holds_two_rows() {
        let mut selected = BTreeSet::new();
        toggle(&mut selected, SelectionMode::Single, "1", true);
        toggle(&mut selected, SelectionMode::Single, "2", true);
        assert_eq!(selected.len(), 1);
        assert!(selected.contains("2"));
    }

    #[test]
    fn test_multi_mode_accumulates() {
        let mut selected = BTreeSet::new();
        toggle(&mut selected, SelectionMode::Multi, "1", true);
        toggle(&mut selected, SelectionMode::Multi, "2", true);
        toggle(&mut selected, SelectionMode::Multi, "1", false);
        assert_eq!(selected.into_iter().collect::<Vec<_>>(), vec!["2".to_string()]);
    }

    #[test]
    fn test_disabled_mode_ignores_toggles() {
        let mut selected = BTreeSet::new();
        toggle(&mut selected, SelectionMode::Disabled, "1", true);
        assert!(selected.is_empty());
    }
}
