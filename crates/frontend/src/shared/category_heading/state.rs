use contracts::shared::category_selection::CategorySelection;
use leptos::prelude::*;
use std::fmt;

/// Откуда пришёл выбор категории
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Query,
    Click,
}

impl fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionSource::Query => f.write_str("query"),
            SelectionSource::Click => f.write_str("click"),
        }
    }
}

/// Текст заголовка `#main-category`.
///
/// `None`, пока ничего не выбрано: разметку заголовка в этом случае не
/// трогаем.
#[derive(Clone, Copy)]
pub struct HeadingState {
    text: RwSignal<Option<String>>,
}

impl HeadingState {
    pub fn new() -> Self {
        Self {
            text: RwSignal::new(None),
        }
    }

    pub fn apply(&self, selection: &CategorySelection, source: SelectionSource) {
        log::debug!("category heading <- {}: {}", source, selection.to_query());
        self.text.set(Some(selection.label()));
    }

    /// Вызывает `f` с текстом заголовка, если выбор уже был.
    /// Внутри `Effect` подписывает его на изменения.
    pub fn with_label(&self, f: impl FnOnce(&str)) {
        self.text.with(|text| {
            if let Some(text) = text {
                f(text);
            }
        });
    }

    #[cfg(test)]
    fn text_untracked(&self) -> Option<String> {
        self.text.get_untracked()
    }
}

impl Default for HeadingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_written_before_selection() {
        let state = HeadingState::new();
        assert_eq!(state.text_untracked(), None);

        let mut written = Vec::new();
        state.with_label(|text| written.push(text.to_string()));
        assert!(written.is_empty());
    }

    #[test]
    fn test_apply_replaces_text() {
        let state = HeadingState::new();
        state.apply(
            &CategorySelection::new("PHONE_CASE", "HARD"),
            SelectionSource::Query,
        );
        assert_eq!(state.text_untracked().as_deref(), Some("폰 케이스 (하드)"));

        state.apply(
            &CategorySelection::from_attributes(Some("AIRPODS".into()), Some("BUDS".into())),
            SelectionSource::Click,
        );
        let mut written = Vec::new();
        state.with_label(|text| written.push(text.to_string()));
        assert_eq!(written, vec!["에어팟/버즈 (버즈)".to_string()]);
    }

    #[test]
    fn test_apply_unknown_category() {
        let state = HeadingState::new();
        state.apply(
            &CategorySelection::new("UNKNOWN", "JELLY"),
            SelectionSource::Click,
        );
        assert_eq!(state.text_untracked().as_deref(), Some(" (젤리)"));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(SelectionSource::Query.to_string(), "query");
        assert_eq!(SelectionSource::Click.to_string(), "click");
    }
}
