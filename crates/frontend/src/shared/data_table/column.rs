use std::cmp::Ordering;

use super::text::fold_case;

/// Значение ячейки, извлечённое из строки аксессором колонки
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Текст для строки (пустые/пробельные строки считаются пустым значением)
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map(Self::text).unwrap_or(CellValue::Empty)
    }

    pub fn number(value: impl Into<f64>) -> Self {
        CellValue::Number(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Строковое представление для отображения и текстового поиска
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
        }
    }

    /// Порядок для сортировки по возрастанию: числа по значению, текст без учёта
    /// регистра, пустые значения всегда в конце.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            (CellValue::Empty, _) => Ordering::Greater,
            (_, CellValue::Empty) => Ordering::Less,
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
            (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
            (CellValue::Text(a), CellValue::Text(b)) => fold_case(a).cmp(&fold_case(b)),
        }
    }
}

/// Вариант фильтра колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVariant {
    /// Свободный текст (подстрока)
    Text,
    /// Одно значение из перечня
    Select,
    /// Несколько значений из перечня
    MultiSelect,
}

/// Как сравнивается текст в текстовом фильтре
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMatch {
    #[default]
    CaseInsensitive,
    /// Без учёта регистра и диакритики: "gomez" находит "Gómez"
    IgnoreAccents,
}

/// Пункт фасетного фильтра
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
    pub count: Option<usize>,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            count: None,
        }
    }

    /// Пункт, у которого метка совпадает со значением
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(value.clone(), value)
    }
}

/// Метаданные колонки для тулбара и фильтров
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnMeta {
    pub label: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub variant: Option<FilterVariant>,
    pub options: Vec<FilterOption>,
    pub text_match: TextMatch,
}

/// Подсказка для рендера ячейки
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellHint {
    Plain,
    /// Обрезать текст длиннее N символов (полный текст уходит в title)
    Truncate(usize),
    /// Бейдж; функция возвращает вариант бейджа по значению
    Badge(fn(&str) -> &'static str),
    /// Текст-заглушка для пустого значения
    OrPlaceholder(&'static str),
    Centered,
}

/// Описание колонки таблицы
pub struct ColumnDef<T> {
    pub id: &'static str,
    pub header: &'static str,
    pub accessor: Option<fn(&T) -> CellValue>,
    pub cell: CellHint,
    pub enable_sorting: bool,
    pub enable_hiding: bool,
    pub meta: ColumnMeta,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header,
            accessor: self.accessor,
            cell: self.cell,
            enable_sorting: self.enable_sorting,
            enable_hiding: self.enable_hiding,
            meta: self.meta.clone(),
        }
    }
}

impl<T> PartialEq for ColumnDef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.header == other.header
            && self.cell == other.cell
            && self.enable_sorting == other.enable_sorting
            && self.enable_hiding == other.enable_hiding
            && self.meta == other.meta
    }
}

impl<T> std::fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("has_accessor", &self.accessor.is_some())
            .field("meta", &self.meta)
            .finish()
    }
}

impl<T> ColumnDef<T> {
    /// Колонка данных; по умолчанию сортируемая и скрываемая
    pub fn accessor(id: &'static str, header: &'static str, accessor: fn(&T) -> CellValue) -> Self {
        Self {
            id,
            header,
            accessor: Some(accessor),
            cell: CellHint::Plain,
            enable_sorting: true,
            enable_hiding: true,
            meta: ColumnMeta {
                label: Some(header),
                ..ColumnMeta::default()
            },
        }
    }

    /// Синтетическая колонка без значения (действия и т.п.)
    pub fn display(id: &'static str, header: &'static str) -> Self {
        Self {
            id,
            header,
            accessor: None,
            cell: CellHint::Plain,
            enable_sorting: false,
            enable_hiding: false,
            meta: ColumnMeta::default(),
        }
    }

    pub fn cell(mut self, hint: CellHint) -> Self {
        self.cell = hint;
        self
    }

    pub fn sortable(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    pub fn hideable(mut self, enabled: bool) -> Self {
        self.enable_hiding = enabled;
        self
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.meta.label = Some(label);
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.meta.placeholder = Some(placeholder);
        self
    }

    pub fn filter(mut self, variant: FilterVariant) -> Self {
        self.meta.variant = Some(variant);
        self
    }

    pub fn options(mut self, options: Vec<FilterOption>) -> Self {
        self.meta.options = options;
        self
    }

    pub fn ignore_accents(mut self) -> Self {
        self.meta.text_match = TextMatch::IgnoreAccents;
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        self.accessor.map(|f| f(row)).unwrap_or(CellValue::Empty)
    }

    pub fn title(&self) -> &'static str {
        self.meta.label.unwrap_or(self.header)
    }

    pub fn can_sort(&self) -> bool {
        self.enable_sorting && self.accessor.is_some()
    }

    pub fn can_filter(&self) -> bool {
        self.accessor.is_some()
    }

    /// Колонка с перечнем значений (для фасетного фильтра в тулбаре)
    pub fn is_faceted(&self) -> bool {
        matches!(
            self.meta.variant,
            Some(FilterVariant::Select) | Some(FilterVariant::MultiSelect)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_empty() {
        assert_eq!(CellValue::text("   "), CellValue::Empty);
        assert_eq!(CellValue::opt_text(None), CellValue::Empty);
        assert_eq!(CellValue::opt_text(Some("Sur")), CellValue::Text("Sur".into()));
    }

    #[test]
    fn test_display_of_numbers() {
        assert_eq!(CellValue::number(7).display(), "7");
        assert_eq!(CellValue::number(2.5).display(), "2.5");
    }

    #[test]
    fn test_compare_puts_empty_last_and_ignores_case() {
        assert_eq!(CellValue::Empty.compare(&CellValue::text("a")), Ordering::Greater);
        assert_eq!(CellValue::text("b").compare(&CellValue::text("A")), Ordering::Greater);
        assert_eq!(CellValue::text("ana").compare(&CellValue::text("ANA")), Ordering::Equal);
        assert_eq!(CellValue::number(10).compare(&CellValue::number(9)), Ordering::Greater);
    }
}
